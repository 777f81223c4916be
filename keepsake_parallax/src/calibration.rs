// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::CalibrationPolicy;

/// Neutral orientation reference for orientation mode.
///
/// A calibration is either settled (it has a neutral pose) or pending (it
/// waits for the next valid orientation sample to become the neutral pose).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    policy: CalibrationPolicy,
    neutral: Option<(f64, f64)>,
}

impl Calibration {
    /// Creates an armed calibration for the given policy.
    #[must_use]
    pub fn new(policy: CalibrationPolicy) -> Self {
        let mut calibration = Self {
            policy,
            neutral: None,
        };
        calibration.rearm();
        calibration
    }

    /// Re-zeroes the baseline according to the policy.
    pub fn rearm(&mut self) {
        self.neutral = match self.policy {
            CalibrationPolicy::Assumed { beta, gamma } => Some((beta, gamma)),
            CalibrationPolicy::CaptureFirstSample => None,
        };
    }

    /// Returns `true` while waiting for a sample to capture.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.neutral.is_none()
    }

    /// The neutral `(beta, gamma)` pose, if settled.
    #[must_use]
    pub fn neutral(&self) -> Option<(f64, f64)> {
        self.neutral
    }

    /// The policy this calibration follows.
    #[must_use]
    pub fn policy(&self) -> CalibrationPolicy {
        self.policy
    }

    /// Returns the calibration that results from observing `(beta, gamma)`.
    ///
    /// A pending calibration captures the observed pose; a settled one is
    /// returned unchanged.
    #[must_use]
    pub fn observe(self, beta: f64, gamma: f64) -> Self {
        if self.neutral.is_some() {
            return self;
        }
        Self {
            neutral: Some((beta, gamma)),
            ..self
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(CalibrationPolicy::default())
    }
}
