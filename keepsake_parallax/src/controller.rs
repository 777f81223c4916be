// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Vec2};

use crate::calibration::Calibration;
use crate::config::{AxisConventions, ControllerConfig};
use crate::sample::{InputKind, InputSample};
use crate::smoothing;

/// The current pan state of the image layer, in output units.
///
/// `x` is horizontal and `y` vertical. With the default configuration the
/// units are degrees of virtual rotation in `[-45, 45]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewOffset {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl ViewOffset {
    /// The zero (centered) offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Returns the offset as a vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for ViewOffset {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Everything that carries over from one sample to the next.
///
/// Obtain an initial state from [`ViewOffsetController::initial_state`] and
/// thread it through [`ViewOffsetController::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetState {
    offset: Vec2,
    velocity: Vec2,
    target: Vec2,
    last_timestamp_ms: Option<u64>,
    calibration: Calibration,
}

impl OffsetState {
    /// The last smoothed offset.
    #[must_use]
    pub fn offset(&self) -> ViewOffset {
        self.offset.into()
    }

    /// The offset the smoothing is currently heading for.
    #[must_use]
    pub fn target(&self) -> ViewOffset {
        self.target.into()
    }

    /// Rate of change of the offset, in output units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Timestamp of the last integrated sample or tick.
    #[must_use]
    pub fn last_timestamp_ms(&self) -> Option<u64> {
        self.last_timestamp_ms
    }

    /// The orientation calibration in effect.
    #[must_use]
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Returns this state with a freshly armed calibration.
    ///
    /// The smoothed offset and its velocity are kept so the view glides
    /// from wherever it was; only the time base restarts.
    #[must_use]
    pub fn recalibrated(self) -> Self {
        let mut calibration = self.calibration;
        calibration.rearm();
        Self {
            calibration,
            last_timestamp_ms: None,
            ..self
        }
    }

    /// Returns this state heading back to the center.
    #[must_use]
    pub fn recentered(self) -> Self {
        Self {
            target: Vec2::ZERO,
            ..self
        }
    }
}

/// Converts pointer/orientation samples into a smoothed, bounded offset.
///
/// The controller itself is pure configuration: every operation takes the
/// previous [`OffsetState`] and returns a new one.
///
/// ## Pipeline
///
/// 1. Normalize to `[-1, 1]` (pointer by half the viewport, orientation by
///    [`ControllerConfig::max_tilt`] after removing the calibration bias).
/// 2. Clamp to `[-1, 1]`.
/// 3. Apply the axis conventions and scale by [`ControllerConfig::max_offset`].
/// 4. Smooth toward that target over the elapsed time.
#[derive(Clone, Debug, Default)]
pub struct ViewOffsetController {
    config: ControllerConfig,
}

impl ViewOffsetController {
    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replaces the viewport used for pointer normalization.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.config.viewport = viewport;
    }

    /// A centered, resting state with an armed calibration.
    #[must_use]
    pub fn initial_state(&self) -> OffsetState {
        OffsetState {
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            last_timestamp_ms: None,
            calibration: Calibration::new(self.config.calibration),
        }
    }

    /// Normalizes a sample into `[-1, 1]` on both axes.
    ///
    /// Returns `None` for samples that carry no usable signal: missing or
    /// non-finite orientation angles, non-finite pointer coordinates, a
    /// degenerate viewport, or a calibration that is still pending.
    /// [`Self::step`] captures pending calibrations before normalizing.
    #[must_use]
    pub fn normalize(&self, sample: &InputSample, calibration: Calibration) -> Option<Vec2> {
        match sample {
            InputSample::Pointer(p) => {
                let vp = self.config.viewport;
                let (half_w, half_h) = (vp.width() * 0.5, vp.height() * 0.5);
                if !p.position.is_finite() || half_w <= 0.0 || half_h <= 0.0 {
                    return None;
                }
                let center = vp.center();
                let n = Vec2::new(
                    (p.position.x - center.x) / half_w,
                    (p.position.y - center.y) / half_h,
                );
                Some(clamp_unit(n))
            }
            InputSample::Orientation(o) => {
                let (beta, gamma) = o.angles()?;
                let (neutral_beta, neutral_gamma) = calibration.neutral()?;
                let max_tilt = self.config.max_tilt;
                if max_tilt <= 0.0 || !max_tilt.is_finite() {
                    return None;
                }
                let n = Vec2::new(
                    (gamma - neutral_gamma) / max_tilt,
                    (beta - neutral_beta) / max_tilt,
                );
                Some(clamp_unit(n))
            }
        }
    }

    /// Maps a normalized value to a target offset for the given input kind.
    #[must_use]
    pub fn target_for(&self, normalized: Vec2, kind: InputKind) -> ViewOffset {
        let axes = self.axes(kind);
        let n = clamp_unit(normalized);
        let max = self.config.max_offset.abs();
        ViewOffset {
            x: axes.x.apply(n.x) * max,
            y: axes.y.apply(n.y) * max,
        }
    }

    /// Integrates one sample into `previous`.
    ///
    /// Returns `None` when the sample is ignored; the caller should keep
    /// `previous` unchanged in that case.
    #[must_use]
    pub fn step(&self, previous: &OffsetState, sample: &InputSample) -> Option<OffsetState> {
        let calibration = match sample {
            InputSample::Orientation(o) => {
                let (beta, gamma) = o.angles()?;
                previous.calibration.observe(beta, gamma)
            }
            InputSample::Pointer(_) => previous.calibration,
        };
        let normalized = self.normalize(sample, calibration)?;
        let target = self.target_for(normalized, sample.kind()).to_vec2();

        let mut next = *previous;
        next.calibration = calibration;
        next.target = target;
        Some(self.integrate(next, sample.timestamp_ms()))
    }

    /// Advances the smoothing toward the current target without a new sample.
    ///
    /// Use this from an animation tick so motion continues between sensor
    /// events.
    #[must_use]
    pub fn advance(&self, previous: &OffsetState, now_ms: u64) -> OffsetState {
        self.integrate(*previous, now_ms)
    }

    /// Maps a state's offset into `[-1, 1]` on both axes.
    #[must_use]
    pub fn normalized_offset(&self, state: &OffsetState) -> Vec2 {
        let max = self.config.max_offset.abs();
        if max > 0.0 {
            clamp_unit(state.offset / max)
        } else {
            Vec2::ZERO
        }
    }

    fn axes(&self, kind: InputKind) -> AxisConventions {
        match kind {
            InputKind::Pointer => self.config.pointer_axes,
            InputKind::Orientation => self.config.orientation_axes,
        }
    }

    fn integrate(&self, mut state: OffsetState, now_ms: u64) -> OffsetState {
        let elapsed_ms = match state.last_timestamp_ms {
            Some(last) => now_ms.saturating_sub(last).min(self.config.max_step_ms),
            None => 0,
        };
        state.last_timestamp_ms = Some(state.last_timestamp_ms.map_or(now_ms, |t| t.max(now_ms)));

        let dt = elapsed_ms as f64 / 1000.0;
        let (offset, velocity) = smoothing::integrate(
            self.config.smoothing,
            state.offset,
            state.velocity,
            state.target,
            dt,
        );
        let (offset, velocity) = self.bound(offset, velocity);
        state.offset = offset;
        state.velocity = velocity;
        state
    }

    /// Clamps the offset to the bound, stopping motion on a clamped axis.
    fn bound(&self, offset: Vec2, velocity: Vec2) -> (Vec2, Vec2) {
        let max = self.config.max_offset.abs();
        let clamp = |p: f64, v: f64| {
            let c = p.clamp(-max, max);
            if c == p { (p, v) } else { (c, 0.0) }
        };
        let (x, vx) = clamp(offset.x, velocity.x);
        let (y, vy) = clamp(offset.y, velocity.y);
        (Vec2::new(x, y), Vec2::new(vx, vy))
    }
}

fn clamp_unit(v: Vec2) -> Vec2 {
    Vec2::new(v.x.clamp(-1.0, 1.0), v.y.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::*;
    use crate::config::{CalibrationPolicy, Smoothing};

    fn controller(smoothing: Smoothing) -> ViewOffsetController {
        ViewOffsetController::new(ControllerConfig {
            smoothing,
            ..ControllerConfig::with_viewport(Rect::new(0.0, 0.0, 800.0, 600.0))
        })
    }

    #[test]
    fn pointer_center_is_zero_and_right_edge_is_max() {
        let c = controller(Smoothing::Immediate);
        let s0 = c.initial_state();

        let center = c
            .step(&s0, &InputSample::pointer(Point::new(400.0, 300.0), 0))
            .unwrap();
        assert_eq!(center.offset(), ViewOffset::ZERO);

        let edge = c
            .step(&s0, &InputSample::pointer(Point::new(800.0, 300.0), 0))
            .unwrap();
        assert_eq!(edge.offset().x, 45.0);
        assert_eq!(edge.offset().y, 0.0);
    }

    #[test]
    fn pointer_up_pans_up_by_default() {
        let c = controller(Smoothing::Immediate);
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(400.0, 0.0), 0),
            )
            .unwrap();
        assert_eq!(s.offset().y, 45.0);
    }

    #[test]
    fn pointer_far_outside_is_clamped() {
        let c = controller(Smoothing::Immediate);
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(-5000.0, 9000.0), 0),
            )
            .unwrap();
        assert_eq!(s.offset(), ViewOffset { x: -45.0, y: -45.0 });
    }

    #[test]
    fn orientation_uses_assumed_neutral_pose() {
        let c = controller(Smoothing::Immediate);
        let s0 = c.initial_state();

        let neutral = c
            .step(&s0, &InputSample::orientation(Some(60.0), Some(0.0), 0))
            .unwrap();
        assert_eq!(neutral.offset(), ViewOffset::ZERO);

        let tilted = c
            .step(&s0, &InputSample::orientation(Some(82.5), Some(-45.0), 0))
            .unwrap();
        assert_eq!(tilted.offset(), ViewOffset { x: -45.0, y: 22.5 });
    }

    #[test]
    fn missing_orientation_field_is_a_no_op() {
        let c = controller(Smoothing::default());
        let s0 = c
            .step(
                &c.initial_state(),
                &InputSample::orientation(Some(70.0), Some(10.0), 0),
            )
            .unwrap();
        assert!(
            c.step(&s0, &InputSample::orientation(None, Some(10.0), 16))
                .is_none()
        );
        assert!(
            c.step(&s0, &InputSample::orientation(Some(f64::NAN), Some(1.0), 16))
                .is_none()
        );
    }

    #[test]
    fn captured_calibration_zeroes_first_sample() {
        let c = ViewOffsetController::new(ControllerConfig {
            smoothing: Smoothing::Immediate,
            calibration: CalibrationPolicy::CaptureFirstSample,
            ..ControllerConfig::default()
        });
        let s0 = c.initial_state();
        let first = c
            .step(&s0, &InputSample::orientation(Some(30.0), Some(5.0), 0))
            .unwrap();
        assert_eq!(first.offset(), ViewOffset::ZERO);
        assert_eq!(first.calibration().neutral(), Some((30.0, 5.0)));

        let next = c
            .step(&first, &InputSample::orientation(Some(30.0), Some(27.5), 10))
            .unwrap();
        assert_eq!(next.offset().x, 22.5);
    }

    #[test]
    fn degenerate_viewport_ignores_pointer() {
        let c = ViewOffsetController::default();
        assert!(
            c.step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(1.0, 1.0), 0)
            )
            .is_none()
        );
    }

    #[test]
    fn first_sample_sets_target_without_moving() {
        let c = controller(Smoothing::default());
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(800.0, 300.0), 1000),
            )
            .unwrap();
        assert_eq!(s.offset(), ViewOffset::ZERO);
        assert_eq!(s.target().x, 45.0);

        let later = c.advance(&s, 1016);
        assert!(later.offset().x > 0.0);
    }

    #[test]
    fn long_gaps_are_capped() {
        let c = controller(Smoothing::default());
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(800.0, 300.0), 0),
            )
            .unwrap();
        let capped = c.advance(&s, 60_000);
        let reference = c.advance(&s, c.config().max_step_ms);
        assert_eq!(capped.offset(), reference.offset());
    }

    #[test]
    fn time_going_backwards_does_not_integrate() {
        let c = controller(Smoothing::default());
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(800.0, 300.0), 500),
            )
            .unwrap();
        let back = c.advance(&s, 100);
        assert_eq!(back.offset(), s.offset());
        assert_eq!(back.last_timestamp_ms(), Some(500));
    }

    #[test]
    fn recalibrated_keeps_offset() {
        let c = controller(Smoothing::Immediate);
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(800.0, 300.0), 0),
            )
            .unwrap();
        let r = s.recalibrated();
        assert_eq!(r.offset(), s.offset());
        assert_eq!(r.last_timestamp_ms(), None);
    }

    #[test]
    fn negative_max_offset_keeps_direction() {
        let c = ViewOffsetController::new(ControllerConfig {
            smoothing: Smoothing::Immediate,
            max_offset: -45.0,
            ..ControllerConfig::with_viewport(Rect::new(0.0, 0.0, 800.0, 600.0))
        });
        let s = c
            .step(
                &c.initial_state(),
                &InputSample::pointer(Point::new(800.0, 0.0), 0),
            )
            .unwrap();
        assert_eq!(s.offset().x, 45.0);
        assert_eq!(s.offset().y, 45.0);
        assert_eq!(c.normalized_offset(&s), Vec2::new(1.0, 1.0));
    }
}
