// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keepsake Parallax: pointer and orientation driven view offsets.
//!
//! This crate turns a stream of pointer positions or device-orientation
//! readings into a smoothed, bounded 2D offset, and maps that offset onto
//! layered transforms that pan an oversized image inside a fixed viewport.
//! The result reads as depth ("a window into the memory") without any 3D
//! rendering.
//!
//! It provides:
//! - [`ViewOffsetController`]: a pure normalize → clamp → scale → smooth
//!   pipeline over [`OffsetState`].
//! - [`Calibration`]: the neutral orientation pose.
//! - [`ParallaxLayers`]: background/foreground placements and a glare
//!   highlight derived from the offset.
//! - [`ParallaxViewer`]: input mode and permission tracking on top of the
//!   controller.
//! - [`listeners`]: scoped host listener registration that is released on
//!   drop.
//!
//! It does **not** render anything or talk to any platform API. Hosts are
//! expected to:
//! - Forward pointer and orientation events as [`InputSample`]s.
//! - Keep a [`listeners::ListenerRegistry`] in sync with
//!   [`ParallaxViewer::wanted_listeners`].
//! - Apply [`LayerPlacement::to_affine`] to their image layers each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use keepsake_parallax::{
//!     ControllerConfig, DeviceClass, InputSample, ParallaxLayers, ParallaxViewer,
//! };
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let mut viewer = ParallaxViewer::new(
//!     ControllerConfig::with_viewport(viewport),
//!     DeviceClass::Desktop,
//! );
//!
//! viewer.handle(&InputSample::pointer(Point::new(700.0, 300.0), 0));
//! viewer.advance(16);
//! viewer.advance(500);
//!
//! let layers = ParallaxLayers::default();
//! let background = layers.background(viewer.normalized_offset());
//! let transform = background.to_affine(viewport);
//! # let _ = transform;
//! assert!(viewer.offset().x > 0.0);
//! ```
//!
//! ## Design notes
//!
//! - All smoothing modes are integrated in closed form, so results do not
//!   depend on how often the host delivers samples.
//! - Offsets are clamped per axis to [`ControllerConfig::max_offset`].
//! - Sign conventions are configuration ([`AxisConventions`]), not fixed
//!   behavior.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod calibration;
mod config;
mod controller;
mod layers;
pub mod listeners;
mod sample;
mod smoothing;
mod viewer;

pub use calibration::Calibration;
pub use config::{AxisConventions, AxisDirection, CalibrationPolicy, ControllerConfig, Smoothing};
pub use controller::{OffsetState, ViewOffset, ViewOffsetController};
pub use layers::{Glare, LayerConfig, LayerPlacement, ParallaxLayers};
pub use sample::{InputKind, InputSample, OrientationSample, PointerSample};
pub use viewer::{DeviceClass, InputMode, ParallaxViewer, PermissionState};
