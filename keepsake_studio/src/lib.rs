// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keepsake Studio: generation services and the session driver.
//!
//! This crate connects the state machines of [`keepsake_flow`] to the
//! generation backend:
//!
//! - [`prompt`]: the instruction sent to the text service, and the templated
//!   fallback used when that service fails.
//! - [`TextGenerator`] / [`ImageGenerator`] / [`VideoGenerator`]: the service
//!   boundary, with [`HttpGenerator`] implementing all three over HTTP.
//! - [`round`]: one draft round, issuing concurrent image requests and keeping
//!   whatever succeeds.
//! - [`Session`]: drives the wizard and studio together, runs test-page
//!   diagnostics, feeds [`SpeechRecognizer`] dictation into the custom
//!   request, and silences [`SpeechSynthesizer`] narration on reset.
//! - [`GenerationConfig`]: endpoints, round size, placeholders and timeout,
//!   loadable from JSON.
//!
//! Failures of individual calls are recovered where the flow allows it: the
//! prompt falls back to a template, failed drafts are dropped, and a round
//! with nothing left either offers configured placeholders or ends in
//! [`StudioStatus::Failed`](keepsake_flow::studio::StudioStatus::Failed).
//! Recovered failures are reported through `tracing`.
//!
//! ## Usage
//!
//! ```no_run
//! use keepsake_flow::wizard::WizardAction;
//! use keepsake_flow::ProfileForm;
//! use keepsake_studio::{Deaf, GenerationConfig, Session, Silent};
//!
//! let config = GenerationConfig::default().with_demo_placeholders();
//! let mut session = Session::over_http(config, Silent, Deaf);
//!
//! session.dispatch(WizardAction::Start)?;
//! session.dispatch(WizardAction::SubmitProfile(ProfileForm {
//!     name: "Minji".into(),
//!     age: "29".into(),
//!     ..ProfileForm::default()
//! }))?;
//! session.dispatch(WizardAction::SelectCountry("KR".into()))?;
//! session.dispatch(WizardAction::SelectLanguage("ko-KR".into()))?;
//!
//! session.run_round_observed(|studio| println!("{:?}", studio.status()))?;
//! session.select_draft(0)?;
//! session.convert()?;
//! # Ok::<(), keepsake_studio::SessionError>(())
//! ```

mod config;
mod error;
mod http;
pub mod prompt;
pub mod round;
mod service;
mod session;
mod speech;

pub use config::GenerationConfig;
pub use error::{ConfigError, GenerationError};
pub use http::{HttpGenerator, parse_images, parse_text, parse_video};
pub use service::{ImageGenerator, TextGenerator, VideoGenerator};
pub use session::{DiagnosticKind, Session, SessionError};
pub use speech::{Deaf, Silent, SpeechRecognizer, SpeechSynthesizer, Transcript, Utterance};
