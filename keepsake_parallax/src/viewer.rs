// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

use crate::config::ControllerConfig;
use crate::controller::{OffsetState, ViewOffset, ViewOffsetController};
use crate::listeners::ListenerSet;
use crate::sample::{InputKind, InputSample};

/// Broad device class, decided by the host once at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Pointer-driven device; no orientation sensor is used.
    Desktop,
    /// Handheld device; orientation sensors may be available behind a prompt.
    Mobile,
}

/// State of the orientation sensor permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermissionState {
    /// No request has been made yet.
    NotRequested,
    /// A prompt is showing; waiting for the host to resolve it.
    Pending,
    /// Orientation events may be used.
    Granted,
    /// The user (or platform) refused, or the sensor is missing.
    Denied,
}

/// Which signal currently drives the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Pointer position drives the offset.
    Pointer,
    /// Device orientation drives the offset.
    Orientation,
    /// Nothing drives the offset; it settles at the center.
    Static,
}

impl InputMode {
    fn accepts(self, kind: InputKind) -> bool {
        matches!(
            (self, kind),
            (Self::Pointer, InputKind::Pointer) | (Self::Orientation, InputKind::Orientation)
        )
    }
}

/// A parallax view: controller state plus input mode and permission tracking.
///
/// The viewer decides which listeners it wants ([`Self::wanted_listeners`]);
/// the host feeds that into a
/// [`ListenerRegistry`](crate::listeners::ListenerRegistry) whenever the
/// mode may have changed, and forwards samples to [`Self::handle`].
#[derive(Clone, Debug)]
pub struct ParallaxViewer {
    controller: ViewOffsetController,
    state: OffsetState,
    device: DeviceClass,
    permission: PermissionState,
    mode: InputMode,
}

impl ParallaxViewer {
    /// Creates a viewer for the given device class.
    ///
    /// Desktops start in pointer mode. Handhelds start static until
    /// orientation permission is granted.
    #[must_use]
    pub fn new(config: ControllerConfig, device: DeviceClass) -> Self {
        let controller = ViewOffsetController::new(config);
        let state = controller.initial_state();
        let (permission, mode) = match device {
            DeviceClass::Desktop => (PermissionState::Granted, InputMode::Pointer),
            DeviceClass::Mobile => (PermissionState::NotRequested, InputMode::Static),
        };
        Self {
            controller,
            state,
            device,
            permission,
            mode,
        }
    }

    /// The underlying controller.
    #[must_use]
    pub fn controller(&self) -> &ViewOffsetController {
        &self.controller
    }

    /// Current controller state.
    #[must_use]
    pub fn state(&self) -> &OffsetState {
        &self.state
    }

    /// Current smoothed offset.
    #[must_use]
    pub fn offset(&self) -> ViewOffset {
        self.state.offset()
    }

    /// Current offset mapped into `[-1, 1]`, ready for
    /// [`ParallaxLayers`](crate::ParallaxLayers).
    #[must_use]
    pub fn normalized_offset(&self) -> Vec2 {
        self.controller.normalized_offset(&self.state)
    }

    /// Device class given at construction.
    #[must_use]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Current permission state.
    #[must_use]
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Current input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Whether the host should show a permission prompt.
    #[must_use]
    pub fn needs_permission_prompt(&self) -> bool {
        self.device == DeviceClass::Mobile && self.permission == PermissionState::NotRequested
    }

    /// Updates the viewport used for pointer normalization.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.controller.set_viewport(viewport);
    }

    /// Marks a permission prompt as in flight.
    ///
    /// Returns `false` (and changes nothing) if permission is already
    /// granted or a request is already pending.
    pub fn request_permission(&mut self) -> bool {
        match self.permission {
            PermissionState::NotRequested | PermissionState::Denied => {
                self.permission = PermissionState::Pending;
                true
            }
            PermissionState::Pending | PermissionState::Granted => false,
        }
    }

    /// Applies the outcome of a permission prompt.
    ///
    /// Hosts without a prompt call this with `true` directly. Granting
    /// switches to orientation mode and re-arms the calibration, keeping the
    /// current offset as the starting point. Denial keeps the viewer in
    /// pointer mode on desktop and static mode on handhelds.
    pub fn permission_resolved(&mut self, granted: bool) {
        if granted {
            self.permission = PermissionState::Granted;
            if self.mode != InputMode::Orientation {
                self.mode = InputMode::Orientation;
                self.state = self.state.recalibrated();
            }
        } else {
            self.permission = PermissionState::Denied;
            self.fall_back();
        }
    }

    /// Reports that orientation listeners could not be attached.
    ///
    /// Treated like a denial so the view degrades instead of waiting.
    pub fn orientation_unavailable(&mut self) {
        if self.mode == InputMode::Orientation || self.permission == PermissionState::Pending {
            self.permission = PermissionState::Denied;
            self.fall_back();
        }
    }

    /// Listeners the current mode needs.
    #[must_use]
    pub fn wanted_listeners(&self) -> ListenerSet {
        match self.mode {
            InputMode::Pointer => ListenerSet::POINTER_MOVE,
            InputMode::Orientation => ListenerSet::DEVICE_ORIENTATION,
            InputMode::Static => ListenerSet::empty(),
        }
    }

    /// Feeds one host sample.
    ///
    /// Returns `true` if the state changed. Samples of the wrong kind for
    /// the current mode, and samples without usable signal, are ignored.
    pub fn handle(&mut self, sample: &InputSample) -> bool {
        if !self.mode.accepts(sample.kind()) {
            return false;
        }
        match self.controller.step(&self.state, sample) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Advances smoothing to `now_ms` without a new sample.
    pub fn advance(&mut self, now_ms: u64) {
        self.state = self.controller.advance(&self.state, now_ms);
    }

    fn fall_back(&mut self) {
        self.mode = match self.device {
            DeviceClass::Desktop => InputMode::Pointer,
            DeviceClass::Mobile => InputMode::Static,
        };
        if self.mode == InputMode::Static {
            self.state = self.state.recentered();
        }
    }
}
