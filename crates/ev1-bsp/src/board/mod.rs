// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The board handle of one core.
//!
//! A [`Board`] ties together the core's configuration, the shared
//! [`Arbiter`], the hardware and the core's [`LeaseLedger`]. Every LED and
//! COM port operation goes through it, so nothing reaches the hardware
//! without first holding the resources it touches.


mod com;
mod layout;
mod led;

pub use layout::{
    COM_COUNT, ComDescriptor, ComPort, LED_COUNT, Led, LedDescriptor, leds_available_on,
};

use rif_abi::{BootMode, CoreId, Pin, ResourceId, ResourceKind};
use rif_arbiter::{Arbiter, IsolationAuthority};

use crate::config::BoardConfig;
use crate::hal::Hal;
use crate::lease::{Lease, LeaseLedger, MAX_LEASE};

/// Board support state for one core.
pub struct Board<'a, A, H> {
    config: BoardConfig,
    arbiter: &'a Arbiter<A>,
    hal: H,
    ledger: LeaseLedger,
    leds: [Option<Lease>; LED_COUNT],
    coms: [Option<Lease>; COM_COUNT],
}

impl<'a, A: IsolationAuthority, H: Hal> Board<'a, A, H> {
    /// Creates a board with no peripheral initialized.
    pub const fn new(config: BoardConfig, arbiter: &'a Arbiter<A>, hal: H) -> Self {
        Self {
            config,
            arbiter,
            hal,
            ledger: LeaseLedger::new(config.core),
            leds: [None, None],
            coms: [None, None, None],
        }
    }

    /// Returns the core this board runs on.
    #[inline]
    #[must_use]
    pub const fn core(&self) -> CoreId {
        self.config.core
    }

    /// Returns the boot mode the arbiter was built with.
    #[inline]
    #[must_use]
    pub const fn boot_mode(&self) -> BootMode {
        self.arbiter.boot_mode()
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the shared arbiter.
    #[must_use]
    pub const fn arbiter(&self) -> &'a Arbiter<A> {
        self.arbiter
    }

    /// Returns the hardware.
    #[must_use]
    pub const fn hal(&self) -> &H {
        &self.hal
    }

    /// Returns the hardware mutably.
    pub const fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Returns the core's lease ledger.
    #[must_use]
    pub const fn ledger(&self) -> &LeaseLedger {
        &self.ledger
    }

    /// Consumes the board, returning the hardware.
    pub fn into_hal(self) -> H {
        self.hal
    }

    /// Resources needed to drive `pins`: the pins themselves, then the
    /// clock gates of their banks.
    ///
    /// A bank gate is included when this core manages clocks and the gate
    /// is either still closed or already leased here. A gate some other
    /// agent opened is left alone.
    fn pin_resources(&self, pins: &[Pin]) -> heapless::Vec<ResourceId, MAX_LEASE> {
        let mut resources = heapless::Vec::new();
        for &pin in pins {
            if resources.push(ResourceId::gpio(pin)).is_err() {
                break;
            }
        }
        if !self.core().manages_clocks() {
            return resources;
        }
        for &pin in pins {
            let gate = pin.bank().clock_gate();
            let resource = ResourceId::clock_gate(gate);
            if resources.contains(&resource) {
                continue;
            }
            if (!self.hal.is_enabled(gate) || self.ledger.holds(resource))
                && resources.push(resource).is_err()
            {
                break;
            }
        }
        resources
    }

    /// Open every bank gate in `lease` that is still closed.
    fn open_bank_clocks(&mut self, lease: &Lease) {
        for resource in lease.resources() {
            if resource.kind() != ResourceKind::ClockGate {
                continue;
            }
            let gate = resource.index();
            if !self.hal.is_enabled(gate) {
                self.hal.enable(gate);
            }
        }
    }
}
