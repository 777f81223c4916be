// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generation service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the generation services live and how a round is shaped.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use keepsake_studio::GenerationConfig;
///
/// let config = GenerationConfig::from_json_str(
///     r#"{ "base_url": "https://party.example", "draft_count": 2 }"#,
/// )
/// .unwrap();
/// assert_eq!(config.text_url(), "https://party.example/api/text/generate");
/// assert_eq!(config.draft_count, 2);
/// assert_eq!(config.timeout_secs, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Scheme and host of the generation backend, without a trailing slash.
    pub base_url: String,
    /// Path of the text generation endpoint.
    pub text_path: String,
    /// Path of the image generation endpoint.
    pub image_path: String,
    /// Path of the video generation endpoint.
    pub video_path: String,
    /// Image model requested from the backend; `None` uses its default.
    pub image_model: Option<String>,
    /// Video model requested from the backend; `None` uses its default.
    pub video_model: Option<String>,
    /// Concurrent image requests per round.
    pub draft_count: usize,
    /// Images offered when every request of a round fails.
    ///
    /// Empty means such a round ends in `Failed`.
    pub placeholder_images: Vec<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Largest response body accepted, in bytes.
    ///
    /// Image responses may carry several inline base64 images.
    pub max_response_bytes: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            text_path: "/api/text/generate".into(),
            image_path: "/api/ai/generate/image".into(),
            video_path: "/api/ai/generate/video".into(),
            image_model: None,
            video_model: None,
            draft_count: 3,
            placeholder_images: Vec::new(),
            timeout_secs: 60,
            max_response_bytes: 64 * 1024 * 1024,
        }
    }
}

impl GenerationConfig {
    /// Demo images used by the studio when the backend is unavailable.
    pub const DEMO_PLACEHOLDERS: [&'static str; 3] = [
        "https://picsum.photos/seed/p1/800/600",
        "https://picsum.photos/seed/p2/800/600",
        "https://picsum.photos/seed/p3/800/600",
    ];

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns this config with [`Self::DEMO_PLACEHOLDERS`] as placeholders.
    #[must_use]
    pub fn with_demo_placeholders(mut self) -> Self {
        self.placeholder_images = Self::DEMO_PLACEHOLDERS.map(String::from).to_vec();
        self
    }

    /// Checks the values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });
        if self.draft_count == 0 {
            return invalid("draft_count", "must be at least 1");
        }
        if self.timeout_secs == 0 {
            return invalid("timeout_secs", "must be at least 1");
        }
        if self.max_response_bytes == 0 {
            return invalid("max_response_bytes", "must be at least 1");
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return invalid("base_url", "must start with http:// or https://");
        }
        for (field, path) in [
            ("text_path", &self.text_path),
            ("image_path", &self.image_path),
            ("video_path", &self.video_path),
        ] {
            if !path.starts_with('/') {
                return invalid(field, "must start with /");
            }
        }
        Ok(())
    }

    /// Full URL of the text endpoint.
    #[must_use]
    pub fn text_url(&self) -> String {
        self.join(&self.text_path)
    }

    /// Full URL of the image endpoint.
    #[must_use]
    pub fn image_url(&self) -> String {
        self.join(&self.image_path)
    }

    /// Full URL of the video endpoint.
    #[must_use]
    pub fn video_url(&self) -> String {
        self.join(&self.video_path)
    }

    /// Per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
