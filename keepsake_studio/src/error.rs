// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the generation services.

use thiserror::Error;

/// Why a single generation call failed.
///
/// Every variant is recoverable at the round level: a failed text call falls
/// back to a templated prompt, and failed image calls are dropped from the
/// round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        /// Endpoint URL.
        endpoint: String,
        /// Transport error message.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}{}", suffix(.detail))]
    Status {
        /// Endpoint URL.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// `detail`, `error` or `message` from a JSON error body.
        detail: Option<String>,
    },

    /// The response body was not the JSON we expected.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The response decoded but carried no usable text or image.
    #[error("response contained no {0}")]
    EmptyResult(&'static str),
}

fn suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

/// Why a [`GenerationConfig`](crate::GenerationConfig) could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON did not parse or had the wrong shape.
    #[error("invalid generation config: {0}")]
    Json(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}
