// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `keepsake_parallax` crate.
//!
//! These exercise the controller end to end: bounds, convergence under a
//! steady input, ignored samples, and how a viewer drives host listeners.

use keepsake_parallax::listeners::{ListenerRegistry, ListenerSet, SensorHost};
use keepsake_parallax::{
    AxisConventions, AxisDirection, ControllerConfig, DeviceClass, InputKind, InputMode,
    InputSample, ParallaxViewer, Smoothing, ViewOffset, ViewOffsetController,
};
use kurbo::{Point, Rect, Vec2};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

fn controller() -> ViewOffsetController {
    ViewOffsetController::new(ControllerConfig::with_viewport(VIEWPORT))
}

#[test]
fn targets_never_exceed_the_bound() {
    let c = controller();
    let max = c.config().max_offset;
    for i in -20..=20 {
        for j in -20..=20 {
            let n = Vec2::new(f64::from(i) / 10.0, f64::from(j) / 10.0);
            for kind in [InputKind::Pointer, InputKind::Orientation] {
                let t = c.target_for(n, kind);
                assert!(t.x.abs() <= max && t.y.abs() <= max, "{n:?} -> {t:?}");
            }
        }
    }
}

#[test]
fn smoothed_offsets_never_exceed_the_bound() {
    // A lively, underdamped spring would overshoot without the clamp.
    let c = ViewOffsetController::new(ControllerConfig {
        smoothing: Smoothing::Spring {
            stiffness: 400.0,
            damping: 4.0,
        },
        ..ControllerConfig::with_viewport(VIEWPORT)
    });
    let mut state = c.initial_state();
    let mut t = 0;
    for step in 0..300 {
        let x = if (step / 20) % 2 == 0 { 1024.0 } else { 0.0 };
        state = c
            .step(&state, &InputSample::pointer(Point::new(x, 0.0), t))
            .unwrap();
        let o = state.offset();
        assert!(o.x.abs() <= 45.0 && o.y.abs() <= 45.0, "{o:?}");
        t += 16;
    }
}

#[test]
fn steady_input_converges_monotonically() {
    let c = controller();
    let sample_at = |t| InputSample::pointer(Point::new(1024.0, 0.0), t);
    let mut state = c.step(&c.initial_state(), &sample_at(0)).unwrap();
    let target = state.target();
    assert_eq!(target, ViewOffset { x: 45.0, y: 45.0 });

    let mut last = state.offset();
    let mut reached = None;
    for frame in 1..=120_u64 {
        state = c.step(&state, &sample_at(frame * 16)).unwrap();
        let o = state.offset();
        assert!(o.x >= last.x && o.y >= last.y, "moved away: {last:?} -> {o:?}");
        last = o;
        if reached.is_none() && (target.x - o.x).abs() < 1e-3 {
            reached = Some(frame);
        }
    }
    let reached = reached.expect("offset never settled");
    assert!(reached < 120, "took {reached} frames");
}

#[test]
fn missing_orientation_leaves_offset_unchanged() {
    let mut viewer = ParallaxViewer::new(ControllerConfig::default(), DeviceClass::Mobile);
    viewer.permission_resolved(true);
    assert!(viewer.handle(&InputSample::orientation(Some(80.0), Some(12.0), 0)));
    viewer.advance(100);
    let before = *viewer.state();

    assert!(!viewer.handle(&InputSample::orientation(None, None, 116)));
    assert!(!viewer.handle(&InputSample::orientation(Some(80.0), None, 132)));
    assert_eq!(*viewer.state(), before);
}

#[test]
fn pointer_center_and_right_edge() {
    let c = ViewOffsetController::new(ControllerConfig {
        smoothing: Smoothing::Immediate,
        ..ControllerConfig::with_viewport(VIEWPORT)
    });
    let s0 = c.initial_state();
    let center = c
        .step(&s0, &InputSample::pointer(VIEWPORT.center(), 0))
        .unwrap();
    assert_eq!(center.offset(), ViewOffset::ZERO);

    let edge = c
        .step(&s0, &InputSample::pointer(Point::new(VIEWPORT.x1, 384.0), 0))
        .unwrap();
    assert_eq!(edge.offset(), ViewOffset { x: 45.0, y: 0.0 });
}

#[test]
fn sign_conventions_are_configurable() {
    let c = ViewOffsetController::new(ControllerConfig {
        smoothing: Smoothing::Immediate,
        orientation_axes: AxisConventions {
            x: AxisDirection::Inverted,
            y: AxisDirection::Normal,
        },
        ..ControllerConfig::default()
    });
    let s = c
        .step(
            &c.initial_state(),
            &InputSample::orientation(Some(60.0), Some(-45.0), 0),
        )
        .unwrap();
    assert_eq!(s.offset().x, 45.0);
}

#[derive(Default)]
struct Host {
    live: ListenerSet,
    orientation_supported: bool,
}

impl SensorHost for Host {
    fn attach(&mut self, listener: ListenerSet) -> bool {
        if listener == ListenerSet::DEVICE_ORIENTATION && !self.orientation_supported {
            return false;
        }
        self.live |= listener;
        true
    }

    fn detach(&mut self, listener: ListenerSet) {
        self.live -= listener;
    }
}

#[test]
fn viewer_and_registry_follow_mode_changes() {
    let mut host = Host {
        orientation_supported: true,
        ..Host::default()
    };
    {
        let mut viewer = ParallaxViewer::new(ControllerConfig::default(), DeviceClass::Mobile);
        let mut registry = ListenerRegistry::new(&mut host);
        registry.reconcile(viewer.wanted_listeners());
        assert!(registry.attached().is_empty());

        viewer.request_permission();
        viewer.permission_resolved(true);
        registry.reconcile(viewer.wanted_listeners());
        assert_eq!(registry.attached(), ListenerSet::DEVICE_ORIENTATION);
    }
    // Unmounting released the orientation listener.
    assert!(host.live.is_empty());
}

#[test]
fn unsupported_sensor_degrades_to_static() {
    let mut host = Host::default();
    let mut viewer = ParallaxViewer::new(ControllerConfig::default(), DeviceClass::Mobile);
    let mut registry = ListenerRegistry::new(&mut host);

    viewer.permission_resolved(true);
    let missing = registry.reconcile(viewer.wanted_listeners());
    if missing.contains(ListenerSet::DEVICE_ORIENTATION) {
        viewer.orientation_unavailable();
    }
    assert_eq!(viewer.mode(), InputMode::Static);
    registry.reconcile(viewer.wanted_listeners());
    assert!(registry.attached().is_empty());
}
