// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Hardware abstraction for the board peripherals.
//!
//! Register programming (GPIO mode registers, RCC enables, USART setup)
//! sits behind these traits, so the arbitration discipline of the board
//! code can be tested on the host with [`MockHal`].


#[cfg(any(test, feature = "std"))]
mod mock;
mod types;

#[cfg(any(test, feature = "std"))]
pub use mock::{HalEvent, MockHal};
pub use types::{IoSupply, Level, PeriphError, PinConfig, PinMode, Pull, Speed, UartInstance};

use crate::config::ComConfig;
use rif_abi::Pin;

/// GPIO line programming.
pub trait GpioController {
    /// Program mode, pull and speed of a pin.
    fn configure(&mut self, pin: Pin, config: PinConfig);

    /// Return a pin to its reset state (analog, no pull).
    fn deconfigure(&mut self, pin: Pin);

    /// Drive an output pin.
    fn write(&mut self, pin: Pin, level: Level);

    /// Sample a pin.
    fn read(&self, pin: Pin) -> Level;

    /// Invert an output pin.
    fn toggle(&mut self, pin: Pin) {
        let level = self.read(pin);
        self.write(pin, level.toggled());
    }
}

/// RCC clock gate programming.
///
/// Gates are addressed by RCC gate index, the same index used for
/// [`ResourceId::clock_gate`](rif_abi::ResourceId::clock_gate).
pub trait ClockController {
    /// Check if a gate is open.
    fn is_enabled(&self, gate: u16) -> bool;

    /// Open a gate.
    fn enable(&mut self, gate: u16);

    /// Close a gate.
    fn disable(&mut self, gate: u16);
}

/// PWR programming.
pub trait PowerController {
    /// Switch on an independent I/O supply.
    fn enable_supply(&mut self, supply: IoSupply);

    /// Unlock write access to the backup (always-on) domain.
    fn enable_backup_access(&mut self);
}

/// USART/UART/LPUART block programming.
pub trait UartController {
    /// Program a UART for TX and RX with 8x oversampling.
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not come out of reset or does not
    /// accept the configuration.
    fn init(&mut self, uart: UartInstance, config: &ComConfig) -> Result<(), PeriphError>;

    /// Put a UART back into reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not acknowledge the disable.
    fn deinit(&mut self, uart: UartInstance) -> Result<(), PeriphError>;

    /// Send bytes, polling for at most `timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns `Timeout` if the transmitter did not drain in time.
    fn transmit(&mut self, uart: UartInstance, data: &[u8], timeout_ms: u32) -> Result<(), PeriphError>;

    /// Receive up to `buf.len()` bytes, polling for at most `timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns `Timeout` if nothing arrived in time.
    fn receive(&mut self, uart: UartInstance, buf: &mut [u8], timeout_ms: u32) -> Result<usize, PeriphError>;

    /// Check if received data is waiting.
    fn rx_ready(&self, uart: UartInstance) -> bool;

    /// Check if the transmitter accepts another byte.
    fn tx_ready(&self, uart: UartInstance) -> bool;
}

/// Everything the board needs from the hardware.
pub trait Hal: GpioController + ClockController + PowerController + UartController {}

impl<T: GpioController + ClockController + PowerController + UartController> Hal for T {}
