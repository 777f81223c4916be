// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Studio status machine: prompt → drafts → selection → render.
//!
//! ## Usage
//!
//! 1) Start a round with [`StudioEvent::Begin`].
//! 2) Report the composed prompt with [`StudioEvent::PromptReady`].
//! 3) Report the settled drafts with [`StudioEvent::DraftsSettled`]. An empty
//!    list ends the round in [`StudioStatus::Failed`]; `Begin` retries.
//! 4) Pick a draft, optionally add a request, then [`StudioEvent::Convert`]
//!    and finally [`StudioEvent::RenderFinished`].
//!
//! ## Minimal example
//!
//! ```
//! use keepsake_flow::studio::{Draft, StudioEvent, StudioState, StudioStatus};
//!
//! let s = StudioState::new()
//!     .apply(StudioEvent::Begin).unwrap()
//!     .apply(StudioEvent::PromptReady("a party".into())).unwrap()
//!     .apply(StudioEvent::DraftsSettled(vec![Draft::generated("data:image/png;base64,AA")]))
//!     .unwrap();
//! assert_eq!(s.status(), StudioStatus::Selection);
//!
//! let s = s.apply(StudioEvent::SelectDraft(0)).unwrap()
//!     .apply(StudioEvent::Convert).unwrap()
//!     .apply(StudioEvent::RenderFinished).unwrap();
//! assert_eq!(s.status(), StudioStatus::Ready);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Where a studio round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StudioStatus {
    /// Nothing started yet.
    #[default]
    Idle,
    /// Composing the generation prompt.
    Prompting,
    /// Waiting for draft images.
    Imagining,
    /// Drafts available; waiting for the user.
    Selection,
    /// Rendering the selected draft.
    Converting,
    /// Finished.
    Ready,
    /// The round produced no drafts.
    Failed,
}

impl StudioStatus {
    /// Every status, in flow order.
    pub const ALL: [Self; 7] = [
        Self::Idle,
        Self::Prompting,
        Self::Imagining,
        Self::Selection,
        Self::Converting,
        Self::Ready,
        Self::Failed,
    ];

    /// Whether the studio is waiting on a collaborator rather than the user.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Prompting | Self::Imagining | Self::Converting)
    }
}

/// Where a draft came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftOrigin {
    /// Returned by the image generation service.
    Generated,
    /// A configured stand-in used when generation failed.
    Placeholder,
}

/// One candidate image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    /// Image URL or `data:` URL.
    pub uri: String,
    /// Where the image came from.
    pub origin: DraftOrigin,
}

impl Draft {
    /// A generated draft.
    pub fn generated(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            origin: DraftOrigin::Generated,
        }
    }

    /// A placeholder draft.
    pub fn placeholder(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            origin: DraftOrigin::Placeholder,
        }
    }
}

/// Inputs to the studio machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudioEvent {
    /// Start (or retry) a round.
    Begin,
    /// The generation prompt is ready.
    PromptReady(String),
    /// All draft requests have settled; these are the usable results.
    DraftsSettled(Vec<Draft>),
    /// The user picked a draft by index.
    SelectDraft(usize),
    /// The user edited the optional custom request.
    SetCustomRequest(String),
    /// The user asked to render the selected draft.
    Convert,
    /// Rendering finished.
    RenderFinished,
}

impl StudioEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Begin => "Begin",
            Self::PromptReady(_) => "PromptReady",
            Self::DraftsSettled(_) => "DraftsSettled",
            Self::SelectDraft(_) => "SelectDraft",
            Self::SetCustomRequest(_) => "SetCustomRequest",
            Self::Convert => "Convert",
            Self::RenderFinished => "RenderFinished",
        }
    }
}

/// Why a studio event was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudioError {
    /// The event is not valid in the current status.
    InvalidEvent {
        /// Status at the time of the event.
        status: StudioStatus,
        /// Name of the rejected event.
        event: &'static str,
    },
    /// The selected index does not name a draft.
    NoSuchDraft {
        /// Requested index.
        index: usize,
        /// Number of drafts available.
        available: usize,
    },
    /// `Convert` was requested before a draft was selected.
    NothingSelected,
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEvent { status, event } => {
                write!(f, "{event} is not valid while {status:?}")
            }
            Self::NoSuchDraft { index, available } => {
                write!(f, "draft {index} does not exist ({available} available)")
            }
            Self::NothingSelected => f.write_str("no draft selected"),
        }
    }
}

impl core::error::Error for StudioError {}

/// Immutable studio state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudioState {
    status: StudioStatus,
    prompt: Option<String>,
    drafts: Vec<Draft>,
    selected: Option<usize>,
    custom_request: String,
    rounds: u32,
}

impl StudioState {
    /// An idle studio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> StudioStatus {
        self.status
    }

    /// The prompt of the current round, once composed.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Drafts of the current round.
    #[must_use]
    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    /// Index of the selected draft.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected draft.
    #[must_use]
    pub fn selected(&self) -> Option<&Draft> {
        self.selected.and_then(|i| self.drafts.get(i))
    }

    /// The optional custom request text.
    #[must_use]
    pub fn custom_request(&self) -> &str {
        &self.custom_request
    }

    /// Number of rounds started so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the state after `event`, or why the event was rejected.
    pub fn apply(&self, event: StudioEvent) -> Result<Self, StudioError> {
        use StudioStatus as S;

        let invalid = |event: &StudioEvent| StudioError::InvalidEvent {
            status: self.status,
            event: event.name(),
        };

        match (self.status, event) {
            (S::Idle | S::Failed, StudioEvent::Begin) => Ok(Self {
                status: S::Prompting,
                rounds: self.rounds + 1,
                ..Self::default()
            }),
            (S::Prompting, StudioEvent::PromptReady(prompt)) => Ok(Self {
                status: S::Imagining,
                prompt: Some(prompt),
                ..self.clone()
            }),
            (S::Imagining, StudioEvent::DraftsSettled(drafts)) => {
                let status = if drafts.is_empty() {
                    S::Failed
                } else {
                    S::Selection
                };
                Ok(Self {
                    status,
                    drafts,
                    selected: None,
                    ..self.clone()
                })
            }
            (S::Selection, StudioEvent::SelectDraft(index)) => {
                if index >= self.drafts.len() {
                    return Err(StudioError::NoSuchDraft {
                        index,
                        available: self.drafts.len(),
                    });
                }
                Ok(Self {
                    selected: Some(index),
                    ..self.clone()
                })
            }
            (S::Selection, StudioEvent::SetCustomRequest(text)) => Ok(Self {
                custom_request: text,
                ..self.clone()
            }),
            (S::Selection, StudioEvent::Convert) => {
                if self.selected.is_none() {
                    return Err(StudioError::NothingSelected);
                }
                Ok(Self {
                    status: S::Converting,
                    ..self.clone()
                })
            }
            (S::Converting, StudioEvent::RenderFinished) => Ok(Self {
                status: S::Ready,
                ..self.clone()
            }),
            (_, event) => Err(invalid(&event)),
        }
    }
}
