// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Per-core lease bookkeeping on top of the arbiter.
//!
//! Several peripherals on one core may need the same resource (two LEDs on
//! one GPIO bank share its clock gate). The arbiter only knows owners, not
//! users, so each core keeps a [`LeaseLedger`] that counts local users and
//! talks to the arbiter on the first acquire and the last release only.
//!
//! Acquisition is all-or-nothing: if any resource of a set is denied, the
//! ones this call already took are handed back in reverse order and the
//! caller gets the denial.

use heapless::{LinearMap, Vec};
use log::{debug, warn};
use rif_abi::{CoreId, ResourceId};
use rif_arbiter::{Arbiter, ArbitrationError, IsolationAuthority};

use crate::error::BspError;

/// Distinct resources one core can hold at a time.
pub const MAX_LEASED: usize = 32;

/// Resources one peripheral can need.
pub const MAX_LEASE: usize = 8;

/// The resources held on behalf of one initialized peripheral.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lease {
    resources: Vec<ResourceId, MAX_LEASE>,
}

impl Lease {
    /// Returns the leased resources in acquisition order.
    #[must_use]
    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    /// Checks if `resource` is part of the lease.
    #[must_use]
    pub fn contains(&self, resource: ResourceId) -> bool {
        self.resources.contains(&resource)
    }

    /// Returns the number of leased resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Checks if the lease holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Reference counts of the resources one core holds.
#[derive(Debug)]
pub struct LeaseLedger {
    core: CoreId,
    counts: LinearMap<ResourceId, u16, MAX_LEASED>,
}

impl LeaseLedger {
    /// Creates an empty ledger for `core`.
    #[must_use]
    pub const fn new(core: CoreId) -> Self {
        Self {
            core,
            counts: LinearMap::new(),
        }
    }

    /// Returns the core the ledger acts for.
    #[must_use]
    pub const fn core(&self) -> CoreId {
        self.core
    }

    /// Returns the number of local users of `resource`.
    #[must_use]
    pub fn users(&self, resource: ResourceId) -> u16 {
        self.counts.get(&resource).copied().unwrap_or(0)
    }

    /// Checks if this core currently holds `resource`.
    #[must_use]
    pub fn holds(&self, resource: ResourceId) -> bool {
        self.users(resource) > 0
    }

    /// Returns the number of distinct resources held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Checks if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Acquire every resource in `resources`, or none of them.
    ///
    /// Duplicates within `resources` are leased once.
    ///
    /// # Errors
    ///
    /// - `InitializationFailure` naming the first denied resource
    /// - `WrongParam` if `resources` has more than [`MAX_LEASE`] entries
    pub fn acquire_all<A: IsolationAuthority>(
        &mut self,
        arbiter: &Arbiter<A>,
        resources: &[ResourceId],
    ) -> Result<Lease, BspError> {
        let mut lease = Lease::default();
        for &resource in resources {
            if lease.contains(resource) {
                continue;
            }
            if lease.resources.push(resource).is_err() {
                self.rollback(arbiter, &lease);
                return Err(BspError::WrongParam);
            }
            if let Err(source) = self.acquire(arbiter, resource) {
                lease.resources.pop();
                self.rollback(arbiter, &lease);
                return Err(BspError::InitializationFailure { resource, source });
            }
        }
        Ok(lease)
    }

    /// Release every resource of `lease`, last acquired first.
    ///
    /// Keeps going after a denial so one stuck resource does not leak the
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseDenied` for the first resource the arbiter refused.
    pub fn release_all<A: IsolationAuthority>(
        &mut self,
        arbiter: &Arbiter<A>,
        lease: Lease,
    ) -> Result<(), BspError> {
        let mut first = Ok(());
        for &resource in lease.resources().iter().rev() {
            if let Err(source) = self.release(arbiter, resource) {
                if first.is_ok() {
                    first = Err(BspError::ReleaseDenied { resource, source });
                }
            }
        }
        first
    }

    fn acquire<A: IsolationAuthority>(
        &mut self,
        arbiter: &Arbiter<A>,
        resource: ResourceId,
    ) -> Result<(), ArbitrationError> {
        if let Some(count) = self.counts.get_mut(&resource) {
            *count = count.saturating_add(1);
            return Ok(());
        }
        if self.counts.len() == MAX_LEASED {
            warn!("{resource}: lease ledger of {} full", self.core);
            return Err(ArbitrationError::TableFull { resource });
        }
        arbiter.try_request(resource, self.core)?;
        if self.counts.insert(resource, 1).is_err() {
            arbiter.try_release(resource, self.core)?;
            return Err(ArbitrationError::TableFull { resource });
        }
        debug!("{resource}: leased by {}", self.core);
        Ok(())
    }

    fn release<A: IsolationAuthority>(
        &mut self,
        arbiter: &Arbiter<A>,
        resource: ResourceId,
    ) -> Result<(), ArbitrationError> {
        let remaining = match self.counts.get_mut(&resource) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => return Ok(()),
        };
        if remaining > 0 {
            return Ok(());
        }
        self.counts.remove(&resource);
        arbiter.try_release(resource, self.core)
    }

    fn rollback<A: IsolationAuthority>(&mut self, arbiter: &Arbiter<A>, lease: &Lease) {
        for &resource in lease.resources().iter().rev() {
            if let Err(err) = self.release(arbiter, resource) {
                warn!("rollback: {err}");
            }
        }
    }
}
