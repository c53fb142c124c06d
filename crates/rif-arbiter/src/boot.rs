// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Boot-mode policy.
//!
//! The boot mode is read once from the boot pin strap latched by the
//! SYSCFG at reset and handed to [`Arbiter::new`](crate::Arbiter::new).
//! Only the dedicated development boot selection disables enforcement;
//! everything else, including a strap that cannot be read, is production.

use log::{info, warn};
use rif_abi::BootMode;

/// Boot pin value (`BOOT[3:0]`) selecting development boot.
pub const DEVELOPER_BOOT_PINS: u8 = 0b0011;

/// Mask of the latched boot pins.
const BOOT_PINS_MASK: u8 = 0b1111;

/// Source of the latched boot pin strap.
pub trait BootStrap {
    /// Read the boot pins, or `None` if the latch is not accessible.
    fn boot_pins(&self) -> Option<u8>;
}

/// A strap value captured earlier (first-stage loader hand-off, tests).
impl BootStrap for Option<u8> {
    fn boot_pins(&self) -> Option<u8> {
        *self
    }
}

/// Resolve the boot mode from the strap, failing closed.
#[must_use]
pub fn resolve_boot_mode<S: BootStrap + ?Sized>(strap: &S) -> BootMode {
    match strap.boot_pins() {
        Some(pins) if pins & BOOT_PINS_MASK == DEVELOPER_BOOT_PINS => {
            warn!("developer boot: resource arbitration disabled");
            BootMode::Developer
        }
        Some(pins) => {
            info!("boot pins {:#06b}: production boot", pins & BOOT_PINS_MASK);
            BootMode::Production
        }
        None => {
            warn!("boot strap unreadable, enforcing arbitration");
            BootMode::Production
        }
    }
}
