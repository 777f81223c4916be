// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wizard step machine: landing → input → country → language → studio.

use alloc::string::String;
use core::fmt;

use crate::brief::{FormError, PartyBrief, PartyOptions, ProfileForm, UserProfile};
use crate::catalog::{self, Country, Language};

/// A wizard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Landing page.
    #[default]
    Landing,
    /// Profile and party options form.
    Input,
    /// Country selection.
    Country,
    /// Language selection.
    Language,
    /// Generation studio.
    Studio,
    /// Service diagnostics page, reachable from the landing page only.
    Test,
}

impl Step {
    /// Steps reachable from this one, excluding resets.
    #[must_use]
    pub fn successors(self) -> &'static [Self] {
        match self {
            Self::Landing => &[Self::Input, Self::Test],
            Self::Input => &[Self::Country],
            Self::Country => &[Self::Language],
            Self::Language => &[Self::Studio],
            Self::Studio => &[],
            Self::Test => &[Self::Landing],
        }
    }

    /// Whether a reset (back to landing) is offered on this step.
    #[must_use]
    pub fn can_reset(self) -> bool {
        !matches!(self, Self::Landing | Self::Test)
    }
}

/// User intents that move the wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardAction {
    /// Start the flow from the landing page.
    Start,
    /// Open the diagnostics page from the landing page.
    OpenTest,
    /// Leave the diagnostics page.
    CloseTest,
    /// Submit the profile form.
    SubmitProfile(ProfileForm),
    /// Pick a country by id.
    SelectCountry(String),
    /// Pick a language by id.
    SelectLanguage(String),
    /// Abandon everything and return to the landing page.
    Reset,
}

impl WizardAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::OpenTest => "OpenTest",
            Self::CloseTest => "CloseTest",
            Self::SubmitProfile(_) => "SubmitProfile",
            Self::SelectCountry(_) => "SelectCountry",
            Self::SelectLanguage(_) => "SelectLanguage",
            Self::Reset => "Reset",
        }
    }
}

/// Why a wizard action was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardError {
    /// The action is not allowed on the current step.
    Transition {
        /// Step at the time of the action.
        step: Step,
        /// Name of the rejected action.
        action: &'static str,
    },
    /// The profile form did not validate.
    Form(FormError),
    /// No country has this id.
    UnknownCountry(String),
    /// No language has this id.
    UnknownLanguage(String),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transition { step, action } => {
                write!(f, "{action} is not allowed on the {step:?} step")
            }
            Self::Form(err) => write!(f, "invalid profile: {err}"),
            Self::UnknownCountry(id) => write!(f, "unknown country {id:?}"),
            Self::UnknownLanguage(id) => write!(f, "unknown language {id:?}"),
        }
    }
}

impl core::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormError> for WizardError {
    fn from(err: FormError) -> Self {
        Self::Form(err)
    }
}

/// Immutable wizard state.
///
/// Every transition goes through [`WizardState::apply`], which returns a new
/// state and leaves `self` untouched.
///
/// ```
/// use keepsake_flow::wizard::{Step, WizardAction, WizardState};
/// use keepsake_flow::ProfileForm;
///
/// let form = ProfileForm {
///     name: "Minji".into(),
///     age: "29".into(),
///     ..ProfileForm::default()
/// };
/// let state = WizardState::new()
///     .apply(WizardAction::Start).unwrap()
///     .apply(WizardAction::SubmitProfile(form)).unwrap()
///     .apply(WizardAction::SelectCountry("KR".into())).unwrap()
///     .apply(WizardAction::SelectLanguage("en-US".into())).unwrap();
/// assert_eq!(state.step(), Step::Studio);
/// assert_eq!(state.brief().unwrap().profile.name, "Minji");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    profile: Option<UserProfile>,
    options: Option<PartyOptions>,
    country: Option<&'static Country>,
    language: Option<&'static Language>,
}

impl WizardState {
    /// A wizard on the landing page with nothing collected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// The submitted profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The submitted party options, if any.
    #[must_use]
    pub fn options(&self) -> Option<&PartyOptions> {
        self.options.as_ref()
    }

    /// The selected country, if any.
    #[must_use]
    pub fn country(&self) -> Option<&'static Country> {
        self.country
    }

    /// The selected language, if any.
    #[must_use]
    pub fn language(&self) -> Option<&'static Language> {
        self.language
    }

    /// The complete brief, available once every step has been answered.
    #[must_use]
    pub fn brief(&self) -> Option<PartyBrief> {
        Some(PartyBrief {
            profile: self.profile.clone()?,
            options: self.options.clone()?,
            country: self.country?,
            language: self.language?,
        })
    }

    /// Returns the state after `action`, or why it was rejected.
    pub fn apply(&self, action: WizardAction) -> Result<Self, WizardError> {
        let rejected = WizardError::Transition {
            step: self.step,
            action: action.name(),
        };
        match (self.step, action) {
            (Step::Landing, WizardAction::Start) => Ok(self.at(Step::Input)),
            (Step::Landing, WizardAction::OpenTest) => Ok(self.at(Step::Test)),
            (Step::Test, WizardAction::CloseTest) => Ok(self.at(Step::Landing)),
            (Step::Input, WizardAction::SubmitProfile(form)) => {
                let (profile, options) = form.validate()?;
                Ok(Self {
                    step: Step::Country,
                    profile: Some(profile),
                    options: Some(options),
                    ..self.clone()
                })
            }
            (Step::Country, WizardAction::SelectCountry(id)) => {
                let country = catalog::country(&id).ok_or(WizardError::UnknownCountry(id))?;
                Ok(Self {
                    step: Step::Language,
                    country: Some(country),
                    ..self.clone()
                })
            }
            (Step::Language, WizardAction::SelectLanguage(id)) => {
                let language = catalog::language(&id).ok_or(WizardError::UnknownLanguage(id))?;
                Ok(Self {
                    step: Step::Studio,
                    language: Some(language),
                    ..self.clone()
                })
            }
            (step, WizardAction::Reset) if step.can_reset() => Ok(Self::new()),
            _ => Err(rejected),
        }
    }

    fn at(&self, step: Step) -> Self {
        debug_assert!(
            self.step.successors().contains(&step),
            "{:?} -> {step:?} is not a declared successor",
            self.step
        );
        Self {
            step,
            ..self.clone()
        }
    }
}
