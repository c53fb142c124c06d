// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The resource arbiter.
//!
//! Per resource the arbiter runs a two-state machine:
//!
//! ```text
//! UNOWNED --request(core), authority accepts--> OWNED(core)
//! OWNED(core) --release(core)--> UNOWNED
//! ```
//!
//! Any request or release by a core other than the owner leaves the state
//! unchanged and is denied. The owner re-requesting is granted without a
//! second authority claim; releasing an unowned resource is granted.
//!
//! The boot mode is consumed once at construction. In developer boot every
//! call is granted and the table is never touched.

use core::cell::RefCell;

use critical_section::Mutex;
use log::{debug, warn};
use rif_abi::{AccessVerdict, BootMode, CoreId, ResourceId};

use crate::authority::IsolationAuthority;
use crate::error::ArbitrationError;
use crate::ownership::OwnershipTable;

/// Mutable arbiter state, only touched inside the critical section.
struct State<A> {
    table: OwnershipTable,
    authority: A,
}

/// Single-owner gatekeeper for shared SoC resources.
///
/// Calls take `&self`. The check-and-claim sequence runs inside a
/// [`critical_section`], so no interrupt handler on this core can observe
/// a half-made claim. A call that re-enters the arbiter while a claim or
/// release is in progress (from the isolation authority, or from the
/// closure given to [`Arbiter::with_authority`]) never waits: a request or
/// release is denied with [`ArbitrationError::Busy`].
pub struct Arbiter<A> {
    mode: BootMode,
    state: Mutex<RefCell<State<A>>>,
}

impl<A: IsolationAuthority> Arbiter<A> {
    /// Creates an arbiter with every resource unowned.
    #[must_use]
    pub const fn new(mode: BootMode, authority: A) -> Self {
        Self {
            mode,
            state: Mutex::new(RefCell::new(State {
                table: OwnershipTable::new(),
                authority,
            })),
        }
    }

    /// Returns the boot mode fixed at construction.
    #[inline]
    #[must_use]
    pub const fn boot_mode(&self) -> BootMode {
        self.mode
    }

    /// Request `resource` for `core`.
    pub fn request(&self, resource: ResourceId, core: CoreId) -> AccessVerdict {
        AccessVerdict::from(self.try_request(resource, core).is_ok())
    }

    /// Release `resource` held by `core`.
    pub fn release(&self, resource: ResourceId, core: CoreId) -> AccessVerdict {
        AccessVerdict::from(self.try_release(resource, core).is_ok())
    }

    /// Request `resource` for `core`, reporting why a denial happened.
    ///
    /// # Errors
    ///
    /// - `Contention` if another core owns the resource
    /// - `AuthorityRejected` if the isolation hardware refuses the claim
    /// - `TableFull` if the claim cannot be recorded
    /// - `Busy` if called from inside another arbiter call
    pub fn try_request(&self, resource: ResourceId, core: CoreId) -> Result<(), ArbitrationError> {
        if self.mode.is_developer() {
            debug!("{resource}: granted to {core} (developer boot)");
            return Ok(());
        }

        critical_section::with(|cs| {
            let Ok(mut state) = self.state.borrow(cs).try_borrow_mut() else {
                warn!("{resource}: {core} denied, arbiter busy");
                return Err(ArbitrationError::Busy { resource });
            };
            let state = &mut *state;
            match state.table.owner(resource) {
                Some(owner) if owner == core => Ok(()),
                Some(owner) => {
                    warn!("{resource}: {core} denied, owned by {owner}");
                    Err(ArbitrationError::Contention { resource, owner })
                }
                None => {
                    if state.table.is_full() {
                        warn!("{resource}: {core} denied, ownership table full");
                        return Err(ArbitrationError::TableFull { resource });
                    }
                    if !state.authority.claim(resource, core) {
                        warn!("{resource}: isolation authority rejected {core}");
                        return Err(ArbitrationError::AuthorityRejected { resource, core });
                    }
                    if !state.table.assign(resource, core) {
                        state.authority.relinquish(resource, core);
                        return Err(ArbitrationError::TableFull { resource });
                    }
                    debug!("{resource}: granted to {core}");
                    Ok(())
                }
            }
        })
    }

    /// Release `resource` held by `core`, reporting why a denial happened.
    ///
    /// # Errors
    ///
    /// - `UnauthorizedRelease` if another core owns the resource
    /// - `Busy` if called from inside another arbiter call
    pub fn try_release(&self, resource: ResourceId, core: CoreId) -> Result<(), ArbitrationError> {
        if self.mode.is_developer() {
            return Ok(());
        }

        critical_section::with(|cs| {
            let Ok(mut state) = self.state.borrow(cs).try_borrow_mut() else {
                warn!("{resource}: {core} release denied, arbiter busy");
                return Err(ArbitrationError::Busy { resource });
            };
            let state = &mut *state;
            match state.table.owner(resource) {
                None => Ok(()),
                Some(owner) if owner == core => {
                    state.table.clear(resource);
                    state.authority.relinquish(resource, core);
                    debug!("{resource}: released by {core}");
                    Ok(())
                }
                Some(owner) => {
                    warn!("{resource}: {core} tried to release, owned by {owner}");
                    Err(ArbitrationError::UnauthorizedRelease {
                        resource,
                        owner,
                        caller: core,
                    })
                }
            }
        })
    }

    /// Returns the current owner of `resource`.
    ///
    /// Always `None` in developer boot, where nothing is tracked, and
    /// from inside the isolation authority while a claim is in progress.
    #[must_use]
    pub fn owner(&self, resource: ResourceId) -> Option<CoreId> {
        self.inspect(|state| state.table.owner(resource)).flatten()
    }

    /// Returns the number of resources currently owned by any core.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.inspect(|state| state.table.len()).unwrap_or(0)
    }

    /// Returns the number of resources currently owned by `core`.
    #[must_use]
    pub fn held_by(&self, core: CoreId) -> usize {
        self.inspect(|state| state.table.held_by(core)).unwrap_or(0)
    }

    /// Run `f` with shared access to the isolation authority.
    ///
    /// `f` runs inside the critical section. Returns `None` if called from
    /// inside the isolation authority itself.
    pub fn with_authority<R>(&self, f: impl FnOnce(&A) -> R) -> Option<R> {
        self.inspect(|state| f(&state.authority))
    }

    fn inspect<R>(&self, f: impl FnOnce(&State<A>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs).try_borrow().ok()?;
            Some(f(&state))
        })
    }
}
