// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speech synthesis and recognition boundaries.

/// One line of narration.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    /// Text to speak.
    pub text: String,
    /// BCP 47 language tag, such as `ko-KR`.
    pub language: String,
    /// Speaking rate; `1.0` is the platform default.
    pub rate: f32,
}

impl Utterance {
    /// An utterance at the default rate.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            rate: 1.0,
        }
    }
}

/// Host text-to-speech.
///
/// Both calls are fire-and-forget: a host without speech support simply
/// ignores them.
pub trait SpeechSynthesizer {
    /// Queues `utterance` for playback.
    fn speak(&mut self, utterance: &Utterance);

    /// Stops current playback and drops anything queued.
    fn cancel(&mut self);
}

impl<S: SpeechSynthesizer + ?Sized> SpeechSynthesizer for &mut S {
    fn speak(&mut self, utterance: &Utterance) {
        (**self).speak(utterance);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}

/// A synthesizer that never makes a sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SpeechSynthesizer for Silent {
    fn speak(&mut self, _: &Utterance) {}

    fn cancel(&mut self) {}
}

/// A transcript reported by a [`SpeechRecognizer`] host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transcript {
    /// Partial text that may still change.
    Interim(String),
    /// Settled text for one phrase.
    Final(String),
}

/// Host speech-to-text.
///
/// Hosts deliver results back through
/// [`Session::hear`](crate::Session::hear). A host without recognition
/// ignores both calls and never reports a transcript.
pub trait SpeechRecognizer {
    /// Starts listening in the given BCP 47 language.
    fn start(&mut self, language: &str);

    /// Stops listening. Stopping an idle recognizer does nothing.
    fn stop(&mut self);
}

impl<R: SpeechRecognizer + ?Sized> SpeechRecognizer for &mut R {
    fn start(&mut self, language: &str) {
        (**self).start(language);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// A recognizer that never hears anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deaf;

impl SpeechRecognizer for Deaf {
    fn start(&mut self, _: &str) {}

    fn stop(&mut self) {}
}
