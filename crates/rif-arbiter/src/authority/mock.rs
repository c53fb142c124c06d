// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock isolation authority for testing.
//!
//! Models static compartment assignment: a resource pinned to a core can
//! only be claimed by that core, unpinned resources by anyone. Every call
//! is recorded so tests can check when the arbiter consults the hardware.

use super::IsolationAuthority;
use rif_abi::{CoreId, ResourceId};
use std::collections::BTreeMap;
use std::vec::Vec;

/// A call observed by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityCall {
    /// `claim(resource, core)`
    Claim(ResourceId, CoreId),
    /// `relinquish(resource, core)`
    Relinquish(ResourceId, CoreId),
}

/// Mock isolation authority with static compartment assignments.
#[derive(Debug, Default)]
pub struct MockAuthority {
    /// Resources the hardware statically assigns to one compartment.
    assignments: BTreeMap<ResourceId, CoreId>,
    /// Reject every claim (isolation hardware locked down).
    reject_all: bool,
    /// Calls in order.
    calls: Vec<AuthorityCall>,
}

impl MockAuthority {
    /// Create a mock that accepts every claim.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: BTreeMap::new(),
            reject_all: false,
            calls: Vec::new(),
        }
    }

    /// Create a mock that rejects every claim.
    #[must_use]
    pub const fn rejecting() -> Self {
        Self {
            assignments: BTreeMap::new(),
            reject_all: true,
            calls: Vec::new(),
        }
    }

    /// Statically assign `resource` to `core`'s compartment.
    #[must_use]
    pub fn with_assignment(mut self, resource: ResourceId, core: CoreId) -> Self {
        self.assignments.insert(resource, core);
        self
    }

    /// Get every call made so far.
    #[must_use]
    pub fn calls(&self) -> &[AuthorityCall] {
        &self.calls
    }

    /// Count the claims made so far.
    #[must_use]
    pub fn claim_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AuthorityCall::Claim(..)))
            .count()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl IsolationAuthority for MockAuthority {
    fn claim(&mut self, resource: ResourceId, core: CoreId) -> bool {
        self.calls.push(AuthorityCall::Claim(resource, core));
        if self.reject_all {
            return false;
        }
        self.assignments
            .get(&resource)
            .is_none_or(|assigned| *assigned == core)
    }

    fn relinquish(&mut self, resource: ResourceId, core: CoreId) {
        self.calls.push(AuthorityCall::Relinquish(resource, core));
    }
}
