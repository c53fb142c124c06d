// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Ownership table.
//!
//! Maps each claimed resource to the core holding it. A resource with no
//! entry is unowned; the table starts empty and only the arbiter mutates it.

use heapless::LinearMap;
use rif_abi::{CoreId, ResourceId};

/// Maximum number of resources owned at the same time.
///
/// The full board uses well under this: two LEDs and three COM ports need
/// fewer than twenty pins, gates and UART blocks together.
pub const MAX_TRACKED: usize = 64;

/// Fixed-capacity map from resource to owning core.
pub struct OwnershipTable {
    entries: LinearMap<ResourceId, CoreId, MAX_TRACKED>,
}

impl OwnershipTable {
    /// Creates an empty table (every resource unowned).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: LinearMap::new(),
        }
    }

    /// Returns the owner of `resource`, or `None` if unowned.
    #[must_use]
    pub fn owner(&self, resource: ResourceId) -> Option<CoreId> {
        self.entries.get(&resource).copied()
    }

    /// Records `core` as owner of an unowned `resource`.
    ///
    /// Returns `false` if the table is full.
    pub fn assign(&mut self, resource: ResourceId, core: CoreId) -> bool {
        self.entries.insert(resource, core).is_ok()
    }

    /// Marks `resource` unowned, returning the previous owner.
    pub fn clear(&mut self, resource: ResourceId) -> Option<CoreId> {
        self.entries.remove(&resource)
    }

    /// Returns the number of owned resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no resource is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if no further resource can be recorded.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_TRACKED
    }

    /// Counts the resources held by `core`.
    #[must_use]
    pub fn held_by(&self, core: CoreId) -> usize {
        self.entries.values().filter(|owner| **owner == core).count()
    }

    /// Iterates over `(resource, owner)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, CoreId)> + '_ {
        self.entries
            .iter()
            .map(|(resource, owner)| (*resource, *owner))
    }
}

impl Default for OwnershipTable {
    fn default() -> Self {
        Self::new()
    }
}
