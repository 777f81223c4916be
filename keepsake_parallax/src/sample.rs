// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Which kind of host signal produced a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Pointer movement in client coordinates.
    Pointer,
    /// Device orientation angles in degrees.
    Orientation,
}

/// A pointer position reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in client (viewport) coordinates.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
}

/// A device orientation reading reported by the host.
///
/// Hosts are allowed to report either angle as missing; such samples carry
/// no usable signal and are ignored by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSample {
    /// Front-to-back tilt in degrees, nominally `[-180, 180]`.
    pub beta: Option<f64>,
    /// Left-to-right tilt in degrees, nominally `[-90, 90]`.
    pub gamma: Option<f64>,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl OrientationSample {
    /// Returns `(beta, gamma)` when both angles are present and finite.
    #[must_use]
    pub fn angles(&self) -> Option<(f64, f64)> {
        match (self.beta, self.gamma) {
            (Some(beta), Some(gamma)) if beta.is_finite() && gamma.is_finite() => {
                Some((beta, gamma))
            }
            _ => None,
        }
    }
}

/// A single timestamped input signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputSample {
    /// A pointer move.
    Pointer(PointerSample),
    /// A device orientation change.
    Orientation(OrientationSample),
}

impl InputSample {
    /// Convenience constructor for a pointer sample.
    #[must_use]
    pub fn pointer(position: Point, timestamp_ms: u64) -> Self {
        Self::Pointer(PointerSample {
            position,
            timestamp_ms,
        })
    }

    /// Convenience constructor for an orientation sample.
    #[must_use]
    pub fn orientation(beta: Option<f64>, gamma: Option<f64>, timestamp_ms: u64) -> Self {
        Self::Orientation(OrientationSample {
            beta,
            gamma,
            timestamp_ms,
        })
    }

    /// Host timestamp in milliseconds.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        match self {
            Self::Pointer(p) => p.timestamp_ms,
            Self::Orientation(o) => o.timestamp_ms,
        }
    }

    /// The kind of signal this sample carries.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Pointer(_) => InputKind::Pointer,
            Self::Orientation(_) => InputKind::Orientation,
        }
    }
}
