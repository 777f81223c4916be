// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session driver: wizard, studio and generation services in one place.

use keepsake_flow::studio::{StudioError, StudioEvent, StudioState, StudioStatus};
use keepsake_flow::wizard::{Step, WizardAction, WizardError, WizardState};
use keepsake_flow::{Locale, PartyBrief};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::http::HttpGenerator;
use crate::prompt;
use crate::round::{self, RoundOutcome};
use crate::service::{ImageGenerator, TextGenerator, VideoGenerator};
use crate::speech::{SpeechRecognizer, SpeechSynthesizer, Transcript, Utterance};

/// Why a session call was rejected. State is unchanged in every case.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The wizard rejected the action.
    #[error(transparent)]
    Wizard(#[from] WizardError),
    /// The studio rejected the event.
    #[error(transparent)]
    Studio(#[from] StudioError),
    /// Studio calls need a wizard on the studio step.
    #[error("the wizard is on the {0:?} step, not the studio")]
    NotInStudio(Step),
    /// Diagnostics run only on the test page.
    #[error("the wizard is on the {0:?} step, not the test page")]
    NotOnTestPage(Step),
    /// A diagnostic was requested with a blank prompt.
    #[error("a prompt is required")]
    EmptyPrompt,
    /// Dictation feeds the custom request, which only exists during selection.
    #[error("dictation is not available while {0:?}")]
    DictationUnavailable(StudioStatus),
    /// A transcript arrived while nothing was listening.
    #[error("no dictation in progress")]
    NotListening,
    /// A diagnostic generation call failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// What a diagnostic run generates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// One image from the image service.
    Image,
    /// One video from the video service.
    Video,
}

/// One user's trip through the wizard.
///
/// Generation calls block until their requests settle; hosts that need to
/// stay responsive run them off the UI thread and observe progress through
/// [`Session::run_round_observed`].
#[derive(Debug)]
pub struct Session<T, I, V, S, R> {
    config: GenerationConfig,
    text: T,
    images: I,
    video: V,
    speech: S,
    recognizer: R,
    wizard: WizardState,
    studio: StudioState,
    last_round: Option<RoundOutcome>,
    listening: bool,
    interim: Option<String>,
}

impl<S, R> Session<HttpGenerator, HttpGenerator, HttpGenerator, S, R>
where
    S: SpeechSynthesizer,
    R: SpeechRecognizer,
{
    /// A session backed by the HTTP generation backend.
    pub fn over_http(config: GenerationConfig, speech: S, recognizer: R) -> Self {
        let http = HttpGenerator::new(&config);
        Self::new(config, http.clone(), http.clone(), http, speech, recognizer)
    }
}

impl<T, I, V, S, R> Session<T, I, V, S, R>
where
    T: TextGenerator,
    I: ImageGenerator,
    V: VideoGenerator,
    S: SpeechSynthesizer,
    R: SpeechRecognizer,
{
    /// A fresh session on the landing page.
    pub fn new(
        config: GenerationConfig,
        text: T,
        images: I,
        video: V,
        speech: S,
        recognizer: R,
    ) -> Self {
        Self {
            config,
            text,
            images,
            video,
            speech,
            recognizer,
            wizard: WizardState::new(),
            studio: StudioState::new(),
            last_round: None,
            listening: false,
            interim: None,
        }
    }

    /// Wizard state.
    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    /// Studio state.
    pub fn studio(&self) -> &StudioState {
        &self.studio
    }

    /// Outcome of the most recent draft round, including its failures.
    pub fn last_round(&self) -> Option<&RoundOutcome> {
        self.last_round.as_ref()
    }

    /// The speech synthesizer.
    pub fn speech(&self) -> &S {
        &self.speech
    }

    /// The speech recognizer.
    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Whether dictation is running.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The latest interim transcript, until it is finalized.
    pub fn interim_transcript(&self) -> Option<&str> {
        self.interim.as_deref()
    }

    /// Copy locale; Korean until a language has been chosen.
    pub fn locale(&self) -> Locale {
        self.wizard
            .language()
            .map(|l| Locale::from_language_id(l.id))
            .unwrap_or_default()
    }

    /// Localized line describing the studio status.
    pub fn status_line(&self) -> &'static str {
        self.locale().copy().status_line(self.studio.status())
    }

    /// Applies a wizard action.
    ///
    /// `Reset` also silences narration, stops dictation and discards the
    /// studio.
    pub fn dispatch(&mut self, action: WizardAction) -> Result<Step, SessionError> {
        let reset = action == WizardAction::Reset;
        let next = self.wizard.apply(action)?;
        debug!(from = ?self.wizard.step(), to = ?next.step(), "wizard transition");
        self.wizard = next;
        if reset {
            self.speech.cancel();
            self.stop_listening();
            self.studio = StudioState::new();
            self.last_round = None;
        }
        Ok(self.wizard.step())
    }

    /// Runs a full draft round: prompt, concurrent drafts, settle.
    ///
    /// Also retries after a failed round.
    pub fn run_round(&mut self) -> Result<StudioStatus, SessionError> {
        self.run_round_observed(|_| {})
    }

    /// Like [`Session::run_round`], calling `observe` after every studio
    /// transition.
    pub fn run_round_observed(
        &mut self,
        mut observe: impl FnMut(&StudioState),
    ) -> Result<StudioStatus, SessionError> {
        let brief = self.brief()?;
        self.studio_event(StudioEvent::Begin)?;
        observe(&self.studio);

        let prompt = match self.text.generate_text(&prompt::instruction(&brief)) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "prompt generation failed; using fallback prompt");
                prompt::fallback(&brief)
            }
        };
        self.studio_event(StudioEvent::PromptReady(prompt.clone()))?;
        observe(&self.studio);

        let outcome = round::run(
            &self.images,
            &prompt,
            self.config.draft_count,
            &self.config.placeholder_images,
        );
        self.studio_event(StudioEvent::DraftsSettled(outcome.drafts.clone()))?;
        self.last_round = Some(outcome);
        observe(&self.studio);
        Ok(self.studio.status())
    }

    /// Selects a draft by index.
    pub fn select_draft(&mut self, index: usize) -> Result<(), SessionError> {
        self.studio_event(StudioEvent::SelectDraft(index))
    }

    /// Sets the optional custom request sent along with the render.
    pub fn set_custom_request(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.studio_event(StudioEvent::SetCustomRequest(text.into()))
    }

    /// Starts dictating the custom request in the chosen language.
    pub fn start_dictation(&mut self) -> Result<(), SessionError> {
        let brief = self.brief()?;
        let status = self.studio.status();
        if status != StudioStatus::Selection {
            return Err(SessionError::DictationUnavailable(status));
        }
        if !self.listening {
            self.recognizer.start(brief.language.id);
            self.listening = true;
        }
        Ok(())
    }

    /// Stops dictation, keeping what was already finalized.
    pub fn stop_dictation(&mut self) {
        self.stop_listening();
    }

    /// Takes a transcript from the recognizer.
    ///
    /// Interim text is only kept for display. Final text is appended to the
    /// custom request.
    pub fn hear(&mut self, transcript: Transcript) -> Result<(), SessionError> {
        if !self.listening {
            return Err(SessionError::NotListening);
        }
        match transcript {
            Transcript::Interim(text) => self.interim = Some(text),
            Transcript::Final(text) => {
                let text = text.trim();
                let current = self.studio.custom_request().trim_end();
                let request = if current.is_empty() {
                    text.to_owned()
                } else {
                    format!("{current} {text}")
                };
                self.studio_event(StudioEvent::SetCustomRequest(request))?;
                self.interim = None;
            }
        }
        Ok(())
    }

    /// Starts rendering the selected draft. Dictation stops here.
    pub fn convert(&mut self) -> Result<(), SessionError> {
        self.studio_event(StudioEvent::Convert)?;
        if self.listening {
            self.stop_listening();
        }
        Ok(())
    }

    /// Marks the render finished and speaks the birthday greeting.
    pub fn finish_render(&mut self) -> Result<(), SessionError> {
        let brief = self.brief()?;
        self.studio_event(StudioEvent::RenderFinished)?;
        self.speech.speak(&Utterance::new(
            format!("{}, {}!", brief.country.greeting, brief.profile.name),
            brief.language.id,
        ));
        Ok(())
    }

    /// Generates one image or video from a free prompt, for the test page.
    ///
    /// Returns the URL of the first result, or the service error with any
    /// detail the backend reported.
    pub fn run_diagnostic(
        &mut self,
        kind: DiagnosticKind,
        prompt: &str,
    ) -> Result<String, SessionError> {
        let step = self.wizard.step();
        if step != Step::Test {
            return Err(SessionError::NotOnTestPage(step));
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SessionError::EmptyPrompt);
        }
        debug!(?kind, "running diagnostic");
        let result = match kind {
            DiagnosticKind::Image => self
                .images
                .generate_images(prompt)
                .and_then(|uris| {
                    uris.into_iter()
                        .next()
                        .ok_or(GenerationError::EmptyResult("images"))
                }),
            DiagnosticKind::Video => self.video.generate_video(prompt, None),
        };
        result.map_err(|err| {
            warn!(?kind, error = %err, "diagnostic failed");
            err.into()
        })
    }

    fn stop_listening(&mut self) {
        self.recognizer.stop();
        self.listening = false;
        self.interim = None;
    }

    fn brief(&self) -> Result<PartyBrief, SessionError> {
        let step = self.wizard.step();
        match self.wizard.brief() {
            Some(brief) if step == Step::Studio => Ok(brief),
            _ => Err(SessionError::NotInStudio(step)),
        }
    }

    fn studio_event(&mut self, event: StudioEvent) -> Result<(), SessionError> {
        if self.wizard.step() != Step::Studio {
            return Err(SessionError::NotInStudio(self.wizard.step()));
        }
        let next = self.studio.apply(event)?;
        debug!(from = ?self.studio.status(), to = ?next.status(), "studio transition");
        self.studio = next;
        Ok(())
    }
}
