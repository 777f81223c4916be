// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered parallax: map a normalized offset to per-layer transforms.
//!
//! A pre-rendered image is scaled past the viewport (overscan) and then
//! translated by a fraction of the viewport size. Layers with different
//! travel fractions move at different speeds, which reads as depth.
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use keepsake_parallax::ParallaxLayers;
//!
//! let layers = ParallaxLayers::default();
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//!
//! // Full deflection to the right moves the background 15% to the left.
//! let bg = layers.background(Vec2::new(1.0, 0.0));
//! assert!((bg.translation(viewport).x + 120.0).abs() < 1e-9);
//! assert_eq!(bg.scale, 1.3);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::config::AxisDirection;

/// Travel and overscan of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    /// Translation at full deflection, as a fraction of the viewport size.
    pub travel: f64,
    /// Uniform scale applied about the viewport center. At least
    /// `1 + 2 * travel` keeps the edges covered.
    pub overscan: f64,
}

/// Placement of one layer for a given offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPlacement {
    /// Translation as a fraction of the viewport size.
    pub shift: Vec2,
    /// Uniform scale about the viewport center.
    pub scale: f64,
}

impl LayerPlacement {
    /// Translation in viewport units.
    #[must_use]
    pub fn translation(&self, viewport: Rect) -> Vec2 {
        Vec2::new(
            self.shift.x * viewport.width(),
            self.shift.y * viewport.height(),
        )
    }

    /// The layer transform: scale about the viewport center, then translate.
    #[must_use]
    pub fn to_affine(&self, viewport: Rect) -> Affine {
        let center = viewport.center().to_vec2();
        Affine::translate(center + self.translation(viewport))
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

/// A soft highlight that follows the offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glare {
    /// Opacity in `[0, max_opacity]`; zero at center.
    pub opacity: f64,
    /// Highlight center as fractions of the viewport, `(0, 0)` top-left.
    pub position: Point,
}

/// Background/foreground layer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayers {
    /// The distant layer; receives the full travel.
    pub background: LayerConfig,
    /// Optional near layer; typically a third of the background travel.
    pub foreground: Option<LayerConfig>,
    /// Layers move against the offset by default, like looking through a window.
    pub direction: AxisDirection,
    /// Glare opacity at full horizontal deflection.
    pub max_glare_opacity: f64,
}

impl Default for ParallaxLayers {
    fn default() -> Self {
        Self {
            background: LayerConfig {
                travel: 0.15,
                overscan: 1.3,
            },
            foreground: Some(LayerConfig {
                travel: 0.05,
                overscan: 1.1,
            }),
            direction: AxisDirection::Inverted,
            max_glare_opacity: 0.1,
        }
    }
}

impl ParallaxLayers {
    /// Background placement for a normalized offset in `[-1, 1]`.
    #[must_use]
    pub fn background(&self, normalized: Vec2) -> LayerPlacement {
        self.place(self.background, normalized)
    }

    /// Foreground placement, if a foreground layer is configured.
    #[must_use]
    pub fn foreground(&self, normalized: Vec2) -> Option<LayerPlacement> {
        self.foreground.map(|layer| self.place(layer, normalized))
    }

    /// Glare for a normalized offset in `[-1, 1]`.
    #[must_use]
    pub fn glare(&self, normalized: Vec2) -> Glare {
        let n = clamp(normalized);
        Glare {
            opacity: n.x.abs() * self.max_glare_opacity,
            position: Point::new((n.x + 1.0) * 0.5, (n.y + 1.0) * 0.5),
        }
    }

    fn place(&self, layer: LayerConfig, normalized: Vec2) -> LayerPlacement {
        let n = clamp(normalized);
        LayerPlacement {
            shift: Vec2::new(
                self.direction.apply(n.x) * layer.travel,
                self.direction.apply(n.y) * layer.travel,
            ),
            scale: layer.overscan,
        }
    }
}

fn clamp(v: Vec2) -> Vec2 {
    Vec2::new(v.x.clamp(-1.0, 1.0), v.y.clamp(-1.0, 1.0))
}
