// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-step integration for [`Smoothing`] modes.
//!
//! All modes are solved in closed form over the whole step, so integrating
//! one 100 ms step lands on the same value as ten 10 ms steps.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::config::Smoothing;

/// Ratios this close to 1 are treated as critically damped.
const CRITICAL_EPSILON: f64 = 1e-9;

/// Advances `position`/`velocity` toward `target` by `dt` seconds.
pub(crate) fn integrate(
    smoothing: Smoothing,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    dt: f64,
) -> (Vec2, Vec2) {
    let (x, vx) = integrate_axis(smoothing, position.x, velocity.x, target.x, dt);
    let (y, vy) = integrate_axis(smoothing, position.y, velocity.y, target.y, dt);
    (Vec2::new(x, y), Vec2::new(vx, vy))
}

fn integrate_axis(smoothing: Smoothing, x: f64, v: f64, target: f64, dt: f64) -> (f64, f64) {
    match smoothing {
        Smoothing::Immediate => (target, 0.0),
        Smoothing::LowPass { time_constant } => {
            if time_constant <= 0.0 || !time_constant.is_finite() {
                return (target, 0.0);
            }
            if dt <= 0.0 {
                return (x, v);
            }
            let alpha = 1.0 - (-dt / time_constant).exp();
            let next = x + (target - x) * alpha;
            (next, (next - x) / dt)
        }
        Smoothing::Spring { stiffness, damping } => {
            if stiffness <= 0.0 || !stiffness.is_finite() || damping < 0.0 || !damping.is_finite() {
                return (target, 0.0);
            }
            if dt <= 0.0 {
                return (x, v);
            }
            let (d, v) = spring_step(stiffness, damping, x - target, v, dt);
            (target + d, v)
        }
    }
}

/// Exact solution of `d'' = -k d - c d'` after `t` seconds.
fn spring_step(k: f64, c: f64, d0: f64, v0: f64, t: f64) -> (f64, f64) {
    let omega = k.sqrt();
    let zeta = c / (2.0 * omega);

    if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        let e = (-omega * t).exp();
        let b = v0 + omega * d0;
        let d = (d0 + b * t) * e;
        let v = (v0 - omega * b * t) * e;
        (d, v)
    } else if zeta < 1.0 {
        let a = zeta * omega;
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let e = (-a * t).exp();
        let (sin, cos) = ((wd * t).sin(), (wd * t).cos());
        let p = d0;
        let q = (v0 + a * d0) / wd;
        let d = e * (p * cos + q * sin);
        let v = e * ((q * wd - a * p) * cos - (p * wd + a * q) * sin);
        (d, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * d0) / (r2 - r1);
        let c1 = d0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRITICAL: Smoothing = Smoothing::Spring {
        stiffness: 100.0,
        damping: 20.0,
    };

    fn step_many(smoothing: Smoothing, steps: usize, dt: f64) -> (f64, f64) {
        let (mut x, mut v) = (0.0, 0.0);
        for _ in 0..steps {
            (x, v) = integrate_axis(smoothing, x, v, 10.0, dt);
        }
        (x, v)
    }

    #[test]
    fn spring_is_frame_rate_independent() {
        for smoothing in [
            CRITICAL,
            Smoothing::Spring {
                stiffness: 170.0,
                damping: 8.0,
            },
            Smoothing::Spring {
                stiffness: 50.0,
                damping: 40.0,
            },
            Smoothing::LowPass {
                time_constant: 0.08,
            },
        ] {
            let (coarse, _) = step_many(smoothing, 1, 0.1);
            let (fine, _) = step_many(smoothing, 10, 0.01);
            assert!(
                (coarse - fine).abs() < 1e-9,
                "{smoothing:?}: {coarse} vs {fine}"
            );
        }
    }

    #[test]
    fn critical_spring_from_rest_does_not_overshoot() {
        let (mut x, mut v) = (0.0, 0.0);
        let mut last = x;
        for _ in 0..200 {
            (x, v) = integrate_axis(CRITICAL, x, v, 10.0, 1.0 / 60.0);
            assert!(x >= last, "moved backwards: {last} -> {x}");
            assert!(x <= 10.0, "overshot: {x}");
            last = x;
        }
        assert!((x - 10.0).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_keeps_state() {
        assert_eq!(integrate_axis(CRITICAL, 3.0, 1.5, 10.0, 0.0), (3.0, 1.5));
        assert_eq!(
            integrate_axis(
                Smoothing::LowPass {
                    time_constant: 0.1
                },
                3.0,
                0.0,
                10.0,
                0.0
            ),
            (3.0, 0.0)
        );
    }

    #[test]
    fn degenerate_parameters_snap_to_target() {
        let bad = Smoothing::Spring {
            stiffness: 0.0,
            damping: 1.0,
        };
        assert_eq!(integrate_axis(bad, 3.0, 1.0, 10.0, 0.016), (10.0, 0.0));
        let bad = Smoothing::LowPass {
            time_constant: f64::NAN,
        };
        assert_eq!(integrate_axis(bad, 3.0, 1.0, 10.0, 0.016), (10.0, 0.0));
        assert_eq!(
            integrate_axis(Smoothing::Immediate, 3.0, 1.0, 10.0, 0.0),
            (10.0, 0.0)
        );
    }
}
