// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Localized studio copy.
//!
//! One table per locale replaces per-language forks of the same screen.

use crate::studio::StudioStatus;

/// Supported copy locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Korean; also the fallback.
    #[default]
    Ko,
    /// English.
    En,
}

impl Locale {
    /// Maps a BCP 47 language tag to a copy locale.
    ///
    /// Anything that is not English falls back to Korean.
    #[must_use]
    pub fn from_language_id(id: &str) -> Self {
        let primary = id.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Self::En
        } else {
            Self::Ko
        }
    }

    /// The copy table for this locale.
    #[must_use]
    pub fn copy(self) -> &'static StudioCopy {
        match self {
            Self::Ko => &KO,
            Self::En => &EN,
        }
    }
}

/// User-facing strings for the studio screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudioCopy {
    /// Shown before generation starts.
    pub idle: &'static str,
    /// Prompt is being composed.
    pub prompting: &'static str,
    /// Drafts are being generated.
    pub imagining: &'static str,
    /// Drafts are ready; waiting for the user to pick one.
    pub waiting: &'static str,
    /// The selected draft is being rendered.
    pub converting: &'static str,
    /// Rendering finished.
    pub complete: &'static str,
    /// No drafts could be generated.
    pub failed: &'static str,
    /// Selection screen title.
    pub selection_title: &'static str,
    /// Selection screen subtitle.
    pub selection_subtitle: &'static str,
    /// Label of the optional custom request field.
    pub request_label: &'static str,
    /// Placeholder of the custom request field.
    pub request_placeholder: &'static str,
    /// Convert button.
    pub convert_button: &'static str,
    /// Retry button shown after a failed round.
    pub retry_button: &'static str,
}

impl StudioCopy {
    /// Status line for the given studio status.
    #[must_use]
    pub fn status_line(&self, status: StudioStatus) -> &'static str {
        match status {
            StudioStatus::Idle => self.idle,
            StudioStatus::Prompting => self.prompting,
            StudioStatus::Imagining => self.imagining,
            StudioStatus::Selection => self.waiting,
            StudioStatus::Converting => self.converting,
            StudioStatus::Ready => self.complete,
            StudioStatus::Failed => self.failed,
        }
    }
}

const KO: StudioCopy = StudioCopy {
    idle: "추억을 그리는 중...",
    prompting: "프롬프트 최적화 중...",
    imagining: "3가지 스타일 초안 생성 중...",
    waiting: "사용자 선택 대기 중...",
    converting: "VEO 3 렌더링 중...",
    complete: "영상 생성 완료!",
    failed: "초안을 만들지 못했어요. 다시 시도해 주세요.",
    selection_title: "어떤 분위기가 마음에 드시나요?",
    selection_subtitle: "가장 마음에 드는 사진을 선택해주세요.",
    request_label: "추가 요청사항 (선택)",
    request_placeholder: "예: 다 같이 웃으면서 박수 쳐주면 좋겠어",
    convert_button: "생생한 영상으로 만들기",
    retry_button: "다시 시도",
};

const EN: StudioCopy = StudioCopy {
    idle: "Visualizing memory...",
    prompting: "Optimizing prompt...",
    imagining: "Generating 3 style drafts...",
    waiting: "Waiting for selection...",
    converting: "VEO 3 Rendering...",
    complete: "Video is ready!",
    failed: "Couldn't create drafts. Please try again.",
    selection_title: "Which vibe do you like?",
    selection_subtitle: "Select your favorite scene.",
    request_label: "Custom Request (Optional)",
    request_placeholder: "e.g., Everyone clapping and laughing",
    convert_button: "Generate Video",
    retry_button: "Try again",
};
