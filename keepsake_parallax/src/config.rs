// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Sign convention for one output axis.
///
/// Different hosts (and different taste) disagree on whether tilting left
/// should pan left or right, so the direction is configuration rather than
/// a fixed rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AxisDirection {
    /// Keep the sign of the normalized input.
    #[default]
    Normal,
    /// Flip the sign of the normalized input.
    Inverted,
}

impl AxisDirection {
    /// Applies this convention to a value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Normal => value,
            Self::Inverted => -value,
        }
    }
}

/// Sign conventions for both output axes of one input mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct AxisConventions {
    /// Horizontal output axis.
    pub x: AxisDirection,
    /// Vertical output axis.
    pub y: AxisDirection,
}

impl AxisConventions {
    /// Pointer default: moving right pans right, moving up pans up.
    pub const POINTER: Self = Self {
        x: AxisDirection::Normal,
        y: AxisDirection::Inverted,
    };

    /// Orientation default: `gamma` drives `x`, `beta` drives `y`, both unflipped.
    pub const ORIENTATION: Self = Self {
        x: AxisDirection::Normal,
        y: AxisDirection::Normal,
    };
}

/// How the smoothed offset follows its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Damped spring with unit mass.
    ///
    /// `stiffness = 100, damping = 20` is critically damped.
    Spring {
        /// Spring constant.
        stiffness: f64,
        /// Damping coefficient.
        damping: f64,
    },
    /// First-order exponential low-pass filter.
    LowPass {
        /// Time constant in seconds.
        time_constant: f64,
    },
    /// Jump straight to the target.
    Immediate,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::Spring {
            stiffness: 100.0,
            damping: 20.0,
        }
    }
}

/// Where the neutral orientation comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalibrationPolicy {
    /// Assume a fixed resting pose.
    Assumed {
        /// Neutral front-to-back tilt in degrees.
        beta: f64,
        /// Neutral left-to-right tilt in degrees.
        gamma: f64,
    },
    /// Use the first valid orientation sample after (re)arming as neutral.
    CaptureFirstSample,
}

impl Default for CalibrationPolicy {
    /// A phone held somewhat upright, around 60° of forward tilt.
    fn default() -> Self {
        Self::Assumed {
            beta: 60.0,
            gamma: 0.0,
        }
    }
}

/// Configuration for a [`ViewOffsetController`](crate::ViewOffsetController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Viewport in client coordinates, used to normalize pointer samples.
    ///
    /// Pointer samples are ignored while this rect has no area.
    pub viewport: Rect,
    /// Clamp bound of the output offset, per axis, in output units.
    ///
    /// Only the magnitude is used; direction comes from the axis conventions.
    pub max_offset: f64,
    /// Tilt in degrees (away from neutral) that maps to full deflection.
    pub max_tilt: f64,
    /// Smoothing mode.
    pub smoothing: Smoothing,
    /// Sign conventions in pointer mode.
    pub pointer_axes: AxisConventions,
    /// Sign conventions in orientation mode.
    pub orientation_axes: AxisConventions,
    /// Neutral orientation policy.
    pub calibration: CalibrationPolicy,
    /// Largest time step integrated at once, in milliseconds.
    pub max_step_ms: u64,
}

impl ControllerConfig {
    /// Default configuration for the given viewport.
    #[must_use]
    pub fn with_viewport(viewport: Rect) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            viewport: Rect::ZERO,
            max_offset: 45.0,
            max_tilt: 45.0,
            smoothing: Smoothing::default(),
            pointer_axes: AxisConventions::POINTER,
            orientation_axes: AxisConventions::ORIENTATION,
            calibration: CalibrationPolicy::default(),
            max_step_ms: 250,
        }
    }
}
