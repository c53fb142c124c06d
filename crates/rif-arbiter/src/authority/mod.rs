// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Isolation authority interface.
//!
//! The isolation authority is the hardware (RIF: RIFSC, RCC and GPIO
//! semaphores plus static compartment filtering) that finally decides
//! whether a core's bus transactions reach a resource. The arbiter calls it
//! only when granting a previously unowned resource in production boot.
//!
//! Which resource maps to which compartment is programmed by the secure
//! boot stages and is not visible here; the authority is an opaque
//! accept/reject.

#[cfg(any(test, feature = "std"))]
mod mock;


#[cfg(any(test, feature = "std"))]
pub use mock::{AuthorityCall, MockAuthority};

use rif_abi::{CoreId, ResourceId};

/// Claim/confirm primitive of the isolation hardware.
pub trait IsolationAuthority {
    /// Attempt to claim `resource` for `core`.
    ///
    /// Returns `false` if the hardware assigns the resource to another
    /// compartment or the semaphore is already taken.
    fn claim(&mut self, resource: ResourceId, core: CoreId) -> bool;

    /// Give back a claim after the owner released the resource.
    ///
    /// Resources without a hardware semaphore have nothing to undo.
    fn relinquish(&mut self, resource: ResourceId, core: CoreId) {
        let _ = (resource, core);
    }
}

impl<T: IsolationAuthority + ?Sized> IsolationAuthority for &mut T {
    fn claim(&mut self, resource: ResourceId, core: CoreId) -> bool {
        (**self).claim(resource, core)
    }

    fn relinquish(&mut self, resource: ResourceId, core: CoreId) {
        (**self).relinquish(resource, core);
    }
}
