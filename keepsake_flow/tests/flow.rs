// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `keepsake_flow` crate.
//!
//! These walk the wizard and studio machines together the way a host would,
//! checking that rejected actions leave state untouched.

use keepsake_flow::studio::{Draft, DraftOrigin, StudioEvent, StudioState, StudioStatus};
use keepsake_flow::wizard::{Step, WizardAction, WizardError, WizardState};
use keepsake_flow::{Locale, PartyLocation, ProfileForm};

fn form() -> ProfileForm {
    ProfileForm {
        name: "Jisoo".into(),
        age: "40".into(),
        occupation: "firefighters".into(),
        location_id: "space".into(),
        ..ProfileForm::default()
    }
}

#[test]
fn full_journey() {
    let mut wizard = WizardState::new();
    for action in [
        WizardAction::Start,
        WizardAction::SubmitProfile(form()),
        WizardAction::SelectCountry("BR".into()),
        WizardAction::SelectLanguage("ja-JP".into()),
    ] {
        wizard = wizard.apply(action).unwrap();
    }
    assert_eq!(wizard.step(), Step::Studio);

    let brief = wizard.brief().unwrap();
    assert_eq!(brief.options.occupation, "firefighters");
    assert!(matches!(brief.options.location, PartyLocation::Known(l) if l.id == "space"));
    // Japanese has no copy table of its own.
    assert_eq!(brief.locale(), Locale::Ko);
}

#[test]
fn rejected_actions_do_not_advance() {
    let input = WizardState::new().apply(WizardAction::Start).unwrap();
    let snapshot = input.clone();

    let err = input
        .apply(WizardAction::SelectLanguage("en-US".into()))
        .unwrap_err();
    assert!(matches!(
        err,
        WizardError::Transition {
            step: Step::Input,
            ..
        }
    ));
    assert_eq!(input, snapshot);
    assert_eq!(
        err.to_string(),
        "SelectLanguage is not allowed on the Input step"
    );
}

#[test]
fn partial_round_offers_only_successful_drafts() {
    let studio = StudioState::new()
        .apply(StudioEvent::Begin)
        .unwrap()
        .apply(StudioEvent::PromptReady("POV birthday party".into()))
        .unwrap()
        .apply(StudioEvent::DraftsSettled(vec![
            Draft::generated("https://cdn.example/1.webp"),
            Draft::generated("https://cdn.example/3.webp"),
        ]))
        .unwrap();
    assert_eq!(studio.status(), StudioStatus::Selection);
    assert_eq!(studio.drafts().len(), 2);
    assert_eq!(studio.prompt(), Some("POV birthday party"));
}

#[test]
fn placeholder_round_is_still_selectable() {
    let studio = StudioState::new()
        .apply(StudioEvent::Begin)
        .unwrap()
        .apply(StudioEvent::PromptReady("p".into()))
        .unwrap()
        .apply(StudioEvent::DraftsSettled(vec![Draft::placeholder(
            "https://picsum.photos/seed/p1/800/600",
        )]))
        .unwrap()
        .apply(StudioEvent::SelectDraft(0))
        .unwrap();
    assert_eq!(
        studio.selected().map(|d| d.origin),
        Some(DraftOrigin::Placeholder)
    );
}

#[test]
fn studio_copy_follows_status() {
    let copy = Locale::Ko.copy();
    let mut studio = StudioState::new();
    assert_eq!(copy.status_line(studio.status()), "추억을 그리는 중...");
    studio = studio.apply(StudioEvent::Begin).unwrap();
    assert_eq!(copy.status_line(studio.status()), "프롬프트 최적화 중...");
}
