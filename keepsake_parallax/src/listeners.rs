// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped sensor listener registration.
//!
//! Hosts expose listener registration through [`SensorHost`]. A
//! [`ListenerRegistry`] owns the set of attached listeners and detaches all of
//! them when dropped, so view transitions (including early returns and
//! unwinding) never leak handlers.
//!
//! ## Minimal example
//!
//! ```
//! use keepsake_parallax::listeners::{ListenerRegistry, ListenerSet, SensorHost};
//!
//! #[derive(Default)]
//! struct Host {
//!     live: ListenerSet,
//! }
//!
//! impl SensorHost for Host {
//!     fn attach(&mut self, listener: ListenerSet) -> bool {
//!         self.live |= listener;
//!         true
//!     }
//!     fn detach(&mut self, listener: ListenerSet) {
//!         self.live -= listener;
//!     }
//! }
//!
//! let mut host = Host::default();
//! {
//!     let mut registry = ListenerRegistry::new(&mut host);
//!     registry.reconcile(ListenerSet::POINTER_MOVE);
//!     assert_eq!(registry.attached(), ListenerSet::POINTER_MOVE);
//! }
//! // Dropping the registry released everything.
//! assert!(host.live.is_empty());
//! ```

bitflags::bitflags! {
    /// Host listeners a viewer may need.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ListenerSet: u8 {
        /// Pointer move events.
        const POINTER_MOVE       = 0b0000_0001;
        /// Device orientation events.
        const DEVICE_ORIENTATION = 0b0000_0010;
    }
}

/// Host-side listener registration.
///
/// Both methods are called with exactly one flag set.
pub trait SensorHost {
    /// Attaches a listener. Returns `false` if the host lacks the capability.
    fn attach(&mut self, listener: ListenerSet) -> bool;

    /// Detaches a previously attached listener.
    fn detach(&mut self, listener: ListenerSet);
}

impl<H: SensorHost + ?Sized> SensorHost for &mut H {
    fn attach(&mut self, listener: ListenerSet) -> bool {
        (**self).attach(listener)
    }

    fn detach(&mut self, listener: ListenerSet) {
        (**self).detach(listener);
    }
}

/// Owns attached listeners and releases them on drop.
#[derive(Debug)]
pub struct ListenerRegistry<H: SensorHost> {
    host: H,
    attached: ListenerSet,
}

impl<H: SensorHost> ListenerRegistry<H> {
    /// Creates an empty registry over `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            attached: ListenerSet::empty(),
        }
    }

    /// Listeners currently attached through this registry.
    pub fn attached(&self) -> ListenerSet {
        self.attached
    }

    /// Attaches missing listeners and detaches unwanted ones.
    ///
    /// Returns the wanted listeners the host could not attach.
    pub fn reconcile(&mut self, wanted: ListenerSet) -> ListenerSet {
        for listener in (self.attached - wanted).iter() {
            self.host.detach(listener);
            self.attached.remove(listener);
        }
        let mut unavailable = ListenerSet::empty();
        for listener in (wanted - self.attached).iter() {
            if self.host.attach(listener) {
                self.attached.insert(listener);
            } else {
                unavailable.insert(listener);
            }
        }
        unavailable
    }

    /// Detaches every listener attached through this registry.
    pub fn release(&mut self) {
        self.reconcile(ListenerSet::empty());
    }

    /// Shared access to the host.
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: SensorHost> Drop for ListenerRegistry<H> {
    fn drop(&mut self) {
        self.release();
    }
}
