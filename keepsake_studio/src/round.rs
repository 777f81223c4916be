// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draft rounds: concurrent image requests and how they settle.

use std::thread;

use keepsake_flow::studio::{Draft, DraftOrigin};
use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::service::ImageGenerator;

/// How a draft round settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Drafts to offer, in request order. Empty means the round failed.
    pub drafts: Vec<Draft>,
    /// Errors of the requests that failed, in request order.
    pub failures: Vec<GenerationError>,
}

impl RoundOutcome {
    /// Whether the drafts are stand-ins rather than generated images.
    #[must_use]
    pub fn used_placeholders(&self) -> bool {
        self.drafts
            .first()
            .is_some_and(|d| d.origin == DraftOrigin::Placeholder)
    }
}

/// Issues `count` independent requests for `prompt` and waits for all of them.
///
/// Each request runs on its own scoped thread. Successful requests contribute
/// their images in request order; failed ones are logged and dropped. A
/// request that returns no images counts as failed. When nothing succeeds the
/// `placeholders` are offered instead, and when there are none the outcome
/// has no drafts at all.
pub fn run<G: ImageGenerator + ?Sized>(
    generator: &G,
    prompt: &str,
    count: usize,
    placeholders: &[String],
) -> RoundOutcome {
    debug!(count, "starting draft round");
    let results: Vec<Result<Vec<String>, GenerationError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..count)
            .map(|_| scope.spawn(move || generator.generate_images(prompt)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    Err(GenerationError::Transport {
                        endpoint: String::from("image generator"),
                        message: String::from("request thread panicked"),
                    })
                })
            })
            .collect()
    });

    let mut drafts = Vec::new();
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(uris) if !uris.is_empty() => drafts.extend(uris.into_iter().map(Draft::generated)),
            Ok(_) => {
                warn!(index, "draft request returned no images");
                failures.push(GenerationError::EmptyResult("images"));
            }
            Err(err) => {
                warn!(index, error = %err, "draft request failed");
                failures.push(err);
            }
        }
    }

    if drafts.is_empty() && !placeholders.is_empty() {
        warn!(
            failed = failures.len(),
            "every draft request failed; offering placeholders"
        );
        drafts = placeholders.iter().map(Draft::placeholder).collect();
    }
    debug!(
        drafts = drafts.len(),
        failed = failures.len(),
        "draft round settled"
    );
    RoundOutcome { drafts, failures }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Fails the `n`th call (0-based, in arrival order).
    struct FailNth {
        calls: AtomicUsize,
        fail: usize,
    }

    impl ImageGenerator for FailNth {
        fn generate_images(&self, prompt: &str) -> Result<Vec<String>, GenerationError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n == self.fail {
                Err(GenerationError::EmptyResult("images"))
            } else {
                Ok(vec![format!("{prompt}-{n}")])
            }
        }
    }

    #[test]
    fn one_failure_keeps_the_others() {
        let generator = FailNth {
            calls: AtomicUsize::new(0),
            fail: 1,
        };
        let outcome = run(&generator, "p", 3, &[]);
        assert_eq!(outcome.drafts.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert!(!outcome.used_placeholders());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 3);
    }

    struct Down;

    impl ImageGenerator for Down {
        fn generate_images(&self, _: &str) -> Result<Vec<String>, GenerationError> {
            Err(GenerationError::Transport {
                endpoint: "http://localhost:8000/api/ai/generate/image".into(),
                message: "connection refused".into(),
            })
        }
    }

    #[test]
    fn total_failure_without_placeholders_is_empty() {
        let outcome = run(&Down, "p", 3, &[]);
        assert!(outcome.drafts.is_empty());
        assert_eq!(outcome.failures.len(), 3);
    }

    #[test]
    fn total_failure_with_placeholders() {
        let placeholders = vec!["a".to_owned(), "b".to_owned()];
        let outcome = run(&Down, "p", 3, &placeholders);
        assert_eq!(
            outcome.drafts,
            [Draft::placeholder("a"), Draft::placeholder("b")]
        );
        assert!(outcome.used_placeholders());
        assert!(outcome.drafts.iter().all(|d| d.origin == DraftOrigin::Placeholder));
    }
}
