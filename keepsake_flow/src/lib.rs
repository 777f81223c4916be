// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keepsake Flow: state machines for the party memory wizard.
//!
//! This crate models the wizard as explicit, immutable state with named
//! steps and a reducer per machine:
//!
//! - [`wizard`]: `Landing → Input → Country → Language → Studio` (plus the
//!   `Test` diagnostics page), collecting a [`PartyBrief`].
//! - [`studio`]: `Idle → Prompting → Imagining → Selection → Converting →
//!   Ready`, with an explicit `Failed` state when a round yields no drafts.
//! - [`catalog`]: the locations, countries, languages, foods and moods the
//!   setup steps offer.
//! - [`Locale`] / [`StudioCopy`]: one copy table per locale.
//!
//! Both reducers take `&self` and an owned action, and return either a new
//! state or an error naming the rejected action. Rejected actions never
//! change state, so hosts can simply keep the previous value.
//!
//! The crate performs no I/O. Driving generation services and deciding what
//! to do with the resulting events is left to higher layers.
//!
//! ## Usage
//!
//! ```rust
//! use keepsake_flow::studio::{StudioEvent, StudioState, StudioStatus};
//! use keepsake_flow::wizard::{WizardAction, WizardState};
//! use keepsake_flow::{Locale, ProfileForm};
//!
//! let form = ProfileForm {
//!     name: "Sam".into(),
//!     age: "31".into(),
//!     location_id: "beach".into(),
//!     ..ProfileForm::default()
//! };
//! let wizard = WizardState::new()
//!     .apply(WizardAction::Start).unwrap()
//!     .apply(WizardAction::SubmitProfile(form)).unwrap()
//!     .apply(WizardAction::SelectCountry("US".into())).unwrap()
//!     .apply(WizardAction::SelectLanguage("en-US".into())).unwrap();
//!
//! let brief = wizard.brief().unwrap();
//! assert_eq!(brief.locale(), Locale::En);
//!
//! let studio = StudioState::new().apply(StudioEvent::Begin).unwrap();
//! assert_eq!(
//!     brief.locale().copy().status_line(studio.status()),
//!     "Optimizing prompt..."
//! );
//! assert_eq!(studio.status(), StudioStatus::Prompting);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod brief;
pub mod catalog;
mod locale;
pub mod studio;
pub mod wizard;

pub use brief::{FormError, PartyBrief, PartyLocation, PartyOptions, ProfileForm, UserProfile};
pub use locale::{Locale, StudioCopy};
