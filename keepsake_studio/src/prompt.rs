// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prompt composition from a [`PartyBrief`].

use std::fmt::Write as _;

use keepsake_flow::PartyBrief;

const DEFAULT_CHARACTERS: &str = "people of similar age";

/// Instruction sent to the text service asking for a video prompt.
#[must_use]
pub fn instruction(brief: &PartyBrief) -> String {
    let PartyBrief {
        profile,
        options,
        country,
        ..
    } = brief;
    let characters = if options.occupation.is_empty() {
        DEFAULT_CHARACTERS
    } else {
        &options.occupation
    };

    let mut out = String::new();
    out.push_str(
        "Create a highly detailed, professional text-to-video prompt for an AI model like Veo 3.\n\
         The goal is to generate a hyper-realistic, 8k, 1st-person POV video filmed with a 360-degree camera.\n\n\
         Context:\n\
         - Event: A surprise birthday party.\n",
    );
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "- Location: {} similar to {}. The scene should authentically reflect this specific setting.",
        options.location.prompt_name(),
        options.location.id(),
    );
    let _ = writeln!(
        out,
        "- Country/Culture: {}. Incorporate subtle cultural elements.",
        country.name
    );
    let _ = writeln!(
        out,
        "- Protagonist: {}, turning {} years old.",
        profile.name, profile.age
    );
    let _ = writeln!(out, "- Characters: Friends who look like {characters}.");
    let _ = writeln!(
        out,
        "- Food: The centerpiece is a birthday cake and {}.",
        options.food
    );
    let _ = writeln!(
        out,
        "- Atmosphere: {} mood. Lighting and color grading should match this vibe.",
        options.vibe
    );
    out.push_str(
        "- Action: Friends jump out or cheer \"Surprise!\", looking directly at the camera.\n\
         - Camera: Handheld 360 camera movement, slight shake, high dynamic range.\n",
    );
    if let Some(decorations) = photo_context(brief) {
        let _ = writeln!(out, "- {decorations}");
    }
    out.push_str("\nOutput: Return ONLY the prompt text in English, no explanations.");
    out
}

/// Prompt used when the text service is unavailable.
///
/// ```
/// use keepsake_flow::wizard::{WizardAction, WizardState};
/// use keepsake_flow::ProfileForm;
///
/// let form = ProfileForm {
///     name: "Minji".into(),
///     age: "29".into(),
///     occupation: "astronauts".into(),
///     location_id: "beach".into(),
///     vibe: "Chill".into(),
///     ..ProfileForm::default()
/// };
/// let brief = WizardState::new()
///     .apply(WizardAction::Start).unwrap()
///     .apply(WizardAction::SubmitProfile(form)).unwrap()
///     .apply(WizardAction::SelectCountry("KR".into())).unwrap()
///     .apply(WizardAction::SelectLanguage("ko-KR".into())).unwrap()
///     .brief().unwrap();
///
/// let prompt = keepsake_studio::prompt::fallback(&brief);
/// assert!(prompt.starts_with("A hyper-realistic 1st person POV shot of a birthday party"));
/// assert!(prompt.contains("Friends dressed as astronauts are cheering."));
/// assert!(prompt.ends_with("Atmosphere is Chill."));
/// ```
#[must_use]
pub fn fallback(brief: &PartyBrief) -> String {
    let options = &brief.options;
    let mut out = format!(
        "A hyper-realistic 1st person POV shot of a birthday party at a {} in {}. \
         Friends dressed as {} are cheering. Atmosphere is {}.",
        options.location.prompt_name(),
        brief.country.name,
        if options.occupation.is_empty() {
            DEFAULT_CHARACTERS
        } else {
            &options.occupation
        },
        options.vibe,
    );
    if let Some(decorations) = photo_context(brief) {
        out.push(' ');
        out.push_str(&decorations);
    }
    out
}

fn photo_context(brief: &PartyBrief) -> Option<String> {
    brief.profile.photo.as_ref().map(|_| {
        format!(
            "Decorations: A large, funny poster of the protagonist ({}) smiling is hanging on the wall.",
            brief.profile.name
        )
    })
}
