// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock hardware for testing.
//!
//! Keeps pin, clock, supply and UART state in memory and records every
//! state-changing call, so tests can check exactly which hardware a board
//! operation touched (and, more importantly, which it did not).

use super::{
    ClockController, GpioController, IoSupply, Level, PeriphError, PinConfig, PowerController,
    UartController, UartInstance,
};
use crate::config::ComConfig;
use rif_abi::Pin;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::vec::Vec;

/// A state-changing call observed by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalEvent {
    /// `configure(pin, config)`
    Configure(Pin, PinConfig),
    /// `deconfigure(pin)`
    Deconfigure(Pin),
    /// `write(pin, level)`
    Write(Pin, Level),
    /// `enable(gate)`
    ClockEnable(u16),
    /// `disable(gate)`
    ClockDisable(u16),
    /// `enable_supply(supply)`
    SupplyEnable(IoSupply),
    /// `enable_backup_access()`
    BackupAccess,
    /// `init(uart, ..)`
    UartInit(UartInstance),
    /// `deinit(uart)`
    UartDeinit(UartInstance),
}

/// In-memory state of one UART block.
#[derive(Debug, Default)]
struct UartState {
    config: Option<ComConfig>,
    tx: Vec<u8>,
    rx: VecDeque<u8>,
}

/// Mock HAL for the board.
#[derive(Debug, Default)]
pub struct MockHal {
    pins: BTreeMap<Pin, (PinConfig, Level)>,
    clocks: BTreeSet<u16>,
    supplies: BTreeSet<IoSupply>,
    backup_access: bool,
    uarts: BTreeMap<UartInstance, UartState>,
    failing_init: BTreeSet<UartInstance>,
    failing_deinit: BTreeSet<UartInstance>,
    events: Vec<HalEvent>,
}

impl MockHal {
    /// Create a mock with every pin in reset and every clock gated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `gate` before the test starts, as boot firmware would.
    #[must_use]
    pub fn with_clock_enabled(mut self, gate: u16) -> Self {
        self.clocks.insert(gate);
        self
    }

    /// Make `init` of `uart` fail with a hardware error.
    #[must_use]
    pub fn with_failing_init(mut self, uart: UartInstance) -> Self {
        self.failing_init.insert(uart);
        self
    }

    /// Make `deinit` of `uart` fail with a hardware error.
    #[must_use]
    pub fn with_failing_deinit(mut self, uart: UartInstance) -> Self {
        self.failing_deinit.insert(uart);
        self
    }

    /// Queue bytes on the receive side of `uart`.
    pub fn push_rx(&mut self, uart: UartInstance, data: &[u8]) {
        self.uarts.entry(uart).or_default().rx.extend(data);
    }

    /// Get the bytes transmitted on `uart`.
    #[must_use]
    pub fn tx_output(&self, uart: UartInstance) -> &[u8] {
        self.uarts
            .get(&uart)
            .map(|state| state.tx.as_slice())
            .unwrap_or(&[])
    }

    /// Get the programming of `uart`, if it is initialized.
    #[must_use]
    pub fn uart_config(&self, uart: UartInstance) -> Option<ComConfig> {
        self.uarts.get(&uart).and_then(|state| state.config)
    }

    /// Get the programming of `pin`, if it left reset.
    #[must_use]
    pub fn pin_config(&self, pin: Pin) -> Option<PinConfig> {
        self.pins.get(&pin).map(|(config, _)| *config)
    }

    /// Check if `supply` was switched on.
    #[must_use]
    pub fn supply_enabled(&self, supply: IoSupply) -> bool {
        self.supplies.contains(&supply)
    }

    /// Check if the backup domain was unlocked.
    #[must_use]
    pub const fn backup_access(&self) -> bool {
        self.backup_access
    }

    /// Get every state-changing call made so far.
    #[must_use]
    pub fn events(&self) -> &[HalEvent] {
        &self.events
    }

    /// Check if any recorded call touched `pin`.
    #[must_use]
    pub fn touched_pin(&self, pin: Pin) -> bool {
        self.events.iter().any(|event| match event {
            HalEvent::Configure(p, _) | HalEvent::Deconfigure(p) | HalEvent::Write(p, _) => {
                *p == pin
            }
            _ => false,
        })
    }

    /// Forget recorded calls.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl GpioController for MockHal {
    fn configure(&mut self, pin: Pin, config: PinConfig) {
        self.events.push(HalEvent::Configure(pin, config));
        self.pins.insert(pin, (config, Level::Low));
    }

    fn deconfigure(&mut self, pin: Pin) {
        self.events.push(HalEvent::Deconfigure(pin));
        self.pins.remove(&pin);
    }

    fn write(&mut self, pin: Pin, level: Level) {
        self.events.push(HalEvent::Write(pin, level));
        if let Some((_, current)) = self.pins.get_mut(&pin) {
            *current = level;
        }
    }

    fn read(&self, pin: Pin) -> Level {
        self.pins.get(&pin).map_or(Level::Low, |(_, level)| *level)
    }
}

impl ClockController for MockHal {
    fn is_enabled(&self, gate: u16) -> bool {
        self.clocks.contains(&gate)
    }

    fn enable(&mut self, gate: u16) {
        self.events.push(HalEvent::ClockEnable(gate));
        self.clocks.insert(gate);
    }

    fn disable(&mut self, gate: u16) {
        self.events.push(HalEvent::ClockDisable(gate));
        self.clocks.remove(&gate);
    }
}

impl PowerController for MockHal {
    fn enable_supply(&mut self, supply: IoSupply) {
        self.events.push(HalEvent::SupplyEnable(supply));
        self.supplies.insert(supply);
    }

    fn enable_backup_access(&mut self) {
        self.events.push(HalEvent::BackupAccess);
        self.backup_access = true;
    }
}

impl UartController for MockHal {
    fn init(&mut self, uart: UartInstance, config: &ComConfig) -> Result<(), PeriphError> {
        self.events.push(HalEvent::UartInit(uart));
        if self.failing_init.contains(&uart) {
            return Err(PeriphError::Hardware);
        }
        self.uarts.entry(uart).or_default().config = Some(*config);
        Ok(())
    }

    fn deinit(&mut self, uart: UartInstance) -> Result<(), PeriphError> {
        self.events.push(HalEvent::UartDeinit(uart));
        if self.failing_deinit.contains(&uart) {
            return Err(PeriphError::Hardware);
        }
        if let Some(state) = self.uarts.get_mut(&uart) {
            state.config = None;
        }
        Ok(())
    }

    fn transmit(&mut self, uart: UartInstance, data: &[u8], _timeout_ms: u32) -> Result<(), PeriphError> {
        match self.uarts.get_mut(&uart) {
            Some(state) if state.config.is_some() => {
                state.tx.extend_from_slice(data);
                Ok(())
            }
            _ => Err(PeriphError::Timeout),
        }
    }

    fn receive(&mut self, uart: UartInstance, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, PeriphError> {
        let Some(state) = self.uarts.get_mut(&uart) else {
            return Err(PeriphError::Timeout);
        };
        if state.config.is_none() || state.rx.is_empty() {
            return Err(PeriphError::Timeout);
        }
        let mut count = 0;
        for slot in buf.iter_mut() {
            match state.rx.pop_front() {
                Some(byte) => {
                    *slot = byte;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }

    fn rx_ready(&self, uart: UartInstance) -> bool {
        self.uarts
            .get(&uart)
            .is_some_and(|state| state.config.is_some() && !state.rx.is_empty())
    }

    fn tx_ready(&self, uart: UartInstance) -> bool {
        self.uarts.get(&uart).is_some_and(|state| state.config.is_some())
    }
}
