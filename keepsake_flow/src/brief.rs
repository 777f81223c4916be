// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data collected by the setup steps.

use alloc::string::{String, ToString};
use core::fmt;

use crate::catalog::{self, Country, Language, Location};
use crate::locale::Locale;

/// Raw profile form input, as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    /// Name or nickname of the guest of honor.
    pub name: String,
    /// Age as typed; must parse as a positive integer.
    pub age: String,
    /// What the friends at the party look like (free text, optional).
    pub occupation: String,
    /// A [`catalog::LOCATIONS`] id, or free text.
    pub location_id: String,
    /// Food at the party.
    pub food: String,
    /// Party mood.
    pub vibe: String,
    /// Optional photo as a `data:` URL.
    pub photo: Option<String>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            occupation: String::new(),
            location_id: "home".into(),
            food: catalog::FOODS[0].into(),
            vibe: catalog::VIBES[0].into(),
            photo: None,
        }
    }
}

/// Why a profile form was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// The name is empty or whitespace.
    MissingName,
    /// The age is empty, not a number, or zero.
    InvalidAge(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("a name is required"),
            Self::InvalidAge(raw) => write!(f, "{raw:?} is not a valid age"),
        }
    }
}

impl core::error::Error for FormError {}

/// The guest of honor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    /// Trimmed name.
    pub name: String,
    /// Age they are turning.
    pub age: u32,
    /// Optional photo as a `data:` URL.
    pub photo: Option<String>,
}

/// Where the party happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartyLocation {
    /// One of the catalog locations.
    Known(&'static Location),
    /// Anything else the form submitted.
    Custom(String),
}

impl PartyLocation {
    /// Resolves a submitted id against the catalog.
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        match catalog::location(id) {
            Some(location) => Self::Known(location),
            None => Self::Custom(id.to_string()),
        }
    }

    /// The identifier the form submitted.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Known(location) => location.id,
            Self::Custom(id) => id,
        }
    }

    /// Name to use in generated prompts.
    #[must_use]
    pub fn prompt_name(&self) -> &str {
        match self {
            Self::Known(location) => location.name_en,
            Self::Custom(id) => id,
        }
    }
}

/// Party options collected alongside the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyOptions {
    /// What the friends look like; may be empty.
    pub occupation: String,
    /// Where the party happens.
    pub location: PartyLocation,
    /// Food at the party.
    pub food: String,
    /// Party mood.
    pub vibe: String,
}

impl ProfileForm {
    /// Validates the form and splits it into profile and options.
    pub fn validate(&self) -> Result<(UserProfile, PartyOptions), FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let age = match self.age.trim().parse::<u32>() {
            Ok(age) if age > 0 => age,
            _ => return Err(FormError::InvalidAge(self.age.clone())),
        };
        let profile = UserProfile {
            name: name.to_string(),
            age,
            photo: self.photo.clone(),
        };
        let options = PartyOptions {
            occupation: self.occupation.trim().to_string(),
            location: PartyLocation::resolve(self.location_id.trim()),
            food: self.food.clone(),
            vibe: self.vibe.clone(),
        };
        Ok((profile, options))
    }
}

/// Everything the studio needs to generate a memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyBrief {
    /// The guest of honor.
    pub profile: UserProfile,
    /// Party options.
    pub options: PartyOptions,
    /// Cultural setting.
    pub country: &'static Country,
    /// Narration language.
    pub language: &'static Language,
}

impl PartyBrief {
    /// Locale for user-facing copy, derived from the narration language.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::from_language_id(self.language.id)
    }
}
