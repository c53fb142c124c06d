// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! User LEDs.

use log::info;
use rif_arbiter::IsolationAuthority;

use super::{Board, Led, leds_available_on};
use crate::error::BspError;
use crate::hal::{Hal, PinConfig};

impl<A: IsolationAuthority, H: Hal> Board<'_, A, H> {
    /// Acquire and configure an LED, leaving it off.
    ///
    /// Initializing an LED that is already initialized is a no-op.
    ///
    /// # Errors
    ///
    /// - `Unsupported` on a core that cannot reach the LEDs
    /// - `InitializationFailure` if the pin or its clock gate is held
    ///   elsewhere; the hardware is left untouched
    pub fn led_init(&mut self, led: Led) -> Result<(), BspError> {
        self.check_leds()?;
        if self.leds[led.index()].is_some() {
            return Ok(());
        }

        let desc = led.descriptor();
        let resources = self.pin_resources(&[desc.pin]);
        let lease = self.ledger.acquire_all(self.arbiter, &resources)?;

        self.open_bank_clocks(&lease);
        if let Some(supply) = desc.supply {
            if self.boot_mode().is_developer() {
                self.hal.enable_supply(supply);
            }
        }
        self.hal.configure(desc.pin, PinConfig::LED_OUTPUT);
        self.hal.write(desc.pin, desc.off());

        info!("{led:?} on {} initialized by {}", desc.pin, self.core());
        self.leds[led.index()] = Some(lease);
        Ok(())
    }

    /// Turn an LED off, return its pin to reset and release it.
    ///
    /// The bank clock stays on; other users of the bank may still need it.
    ///
    /// # Errors
    ///
    /// - `Unsupported` on a core that cannot reach the LEDs
    /// - `NotInitialized` if the LED was never initialized
    /// - `ReleaseDenied` if the arbiter refused a release
    pub fn led_deinit(&mut self, led: Led) -> Result<(), BspError> {
        self.check_leds()?;
        let lease = self.leds[led.index()]
            .take()
            .ok_or(BspError::NotInitialized)?;

        let desc = led.descriptor();
        self.hal.write(desc.pin, desc.off());
        self.hal.deconfigure(desc.pin);

        info!("{led:?} released by {}", self.core());
        self.ledger.release_all(self.arbiter, lease)
    }

    /// Light an LED.
    ///
    /// # Errors
    ///
    /// - `Unsupported` on a core that cannot reach the LEDs
    /// - `NotInitialized` if the LED was never initialized
    pub fn led_on(&mut self, led: Led) -> Result<(), BspError> {
        self.check_led(led)?;
        let desc = led.descriptor();
        self.hal.write(desc.pin, desc.on);
        Ok(())
    }

    /// Turn an LED off.
    ///
    /// # Errors
    ///
    /// - `Unsupported` on a core that cannot reach the LEDs
    /// - `NotInitialized` if the LED was never initialized
    pub fn led_off(&mut self, led: Led) -> Result<(), BspError> {
        self.check_led(led)?;
        let desc = led.descriptor();
        self.hal.write(desc.pin, desc.off());
        Ok(())
    }

    /// Invert an LED.
    ///
    /// # Errors
    ///
    /// - `Unsupported` on a core that cannot reach the LEDs
    /// - `NotInitialized` if the LED was never initialized
    pub fn led_toggle(&mut self, led: Led) -> Result<(), BspError> {
        self.check_led(led)?;
        self.hal.toggle(led.descriptor().pin);
        Ok(())
    }

    /// Checks if an LED is lit.
    ///
    /// The LED's polarity is applied: an active-low LED whose pin reads
    /// `Low` is reported as lit (`true`). This is not the raw pin level,
    /// which [`GpioController::read`](crate::hal::GpioController::read)
    /// returns.
    ///
    /// # Errors
    ///
    /// - `Unsupported` on a core that cannot reach the LEDs
    /// - `NotInitialized` if the LED was never initialized
    pub fn led_state(&self, led: Led) -> Result<bool, BspError> {
        self.check_led(led)?;
        let desc = led.descriptor();
        Ok(self.hal.read(desc.pin) == desc.on)
    }

    /// Checks if an LED is initialized on this core.
    #[must_use]
    pub const fn led_initialized(&self, led: Led) -> bool {
        self.leds[led.index()].is_some()
    }

    fn check_leds(&self) -> Result<(), BspError> {
        if leds_available_on(self.core()) {
            Ok(())
        } else {
            Err(BspError::Unsupported { core: self.core() })
        }
    }

    fn check_led(&self, led: Led) -> Result<(), BspError> {
        self.check_leds()?;
        if self.led_initialized(led) {
            Ok(())
        } else {
            Err(BspError::NotInitialized)
        }
    }
}
