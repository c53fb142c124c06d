// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Arbitration failures.
//!
//! The arbiter never aborts. Each failure is returned to the caller, which
//! decides whether the affected peripheral is fatal for it.

use rif_abi::{CoreId, ResourceId};

/// Reason a request or release was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArbitrationError {
    /// Another core already owns the resource.
    #[error("{resource} is owned by {owner}")]
    Contention {
        /// Contended resource.
        resource: ResourceId,
        /// Current holder.
        owner: CoreId,
    },
    /// The isolation hardware assigns the resource to another compartment.
    #[error("isolation authority rejected {resource} for {core}")]
    AuthorityRejected {
        /// Requested resource.
        resource: ResourceId,
        /// Requesting core.
        core: CoreId,
    },
    /// A core tried to release a resource it does not own.
    #[error("{caller} cannot release {resource} owned by {owner}")]
    UnauthorizedRelease {
        /// Resource named in the release.
        resource: ResourceId,
        /// Current holder.
        owner: CoreId,
        /// Core that attempted the release.
        caller: CoreId,
    },
    /// The ownership table has no room for another entry.
    #[error("ownership table full, cannot track {resource}")]
    TableFull {
        /// Resource that could not be recorded.
        resource: ResourceId,
    },
    /// The call re-entered the arbiter while its state was being changed.
    #[error("arbiter busy, {resource} not handled")]
    Busy {
        /// Resource named in the call.
        resource: ResourceId,
    },
}

impl ArbitrationError {
    /// Returns the resource the failure is about.
    #[must_use]
    pub const fn resource(&self) -> ResourceId {
        match *self {
            Self::Contention { resource, .. }
            | Self::AuthorityRejected { resource, .. }
            | Self::UnauthorizedRelease { resource, .. }
            | Self::TableFull { resource }
            | Self::Busy { resource } => resource,
        }
    }
}
