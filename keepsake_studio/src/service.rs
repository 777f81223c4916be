// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generation service boundary.
//!
//! The studio only ever talks to these traits. [`HttpGenerator`] implements
//! all three against the Keepsake backend; tests use in-memory fakes.
//!
//! [`HttpGenerator`]: crate::HttpGenerator

use crate::error::GenerationError;

/// Turns an instruction into text.
pub trait TextGenerator {
    /// Returns the completion for `prompt`.
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Turns a prompt into images.
///
/// `Sync` because a draft round calls one generator from several threads.
pub trait ImageGenerator: Sync {
    /// Returns the image URIs (URLs or `data:` URLs) produced for `prompt`.
    ///
    /// An empty list is a valid answer; the round treats it like a failure.
    fn generate_images(&self, prompt: &str) -> Result<Vec<String>, GenerationError>;
}

/// Turns a prompt, optionally anchored on a still image, into a video.
pub trait VideoGenerator {
    /// Returns the URL of the rendered video.
    ///
    /// `image_url` is the first frame to animate from, when the model
    /// supports it.
    fn generate_video(
        &self,
        prompt: &str,
        image_url: Option<&str>,
    ) -> Result<String, GenerationError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate_text(prompt)
    }
}

impl<T: ImageGenerator + ?Sized> ImageGenerator for &T {
    fn generate_images(&self, prompt: &str) -> Result<Vec<String>, GenerationError> {
        (**self).generate_images(prompt)
    }
}

impl<T: VideoGenerator + ?Sized> VideoGenerator for &T {
    fn generate_video(
        &self,
        prompt: &str,
        image_url: Option<&str>,
    ) -> Result<String, GenerationError> {
        (**self).generate_video(prompt, image_url)
    }
}
