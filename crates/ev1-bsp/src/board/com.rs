// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! COM ports.

use heapless::Vec;
use log::{error, info};
use rif_abi::ResourceId;
use rif_arbiter::IsolationAuthority;

use super::{Board, ComPort};
use crate::config::ComConfig;
use crate::error::BspError;
use crate::hal::{Hal, PinConfig};
use crate::lease::MAX_LEASE;
use crate::uart::Console;

impl<A: IsolationAuthority, H: Hal> Board<'_, A, H> {
    /// Acquire a COM port and program it with `config`.
    ///
    /// On an already initialized port only the line settings are
    /// reprogrammed.
    ///
    /// # Errors
    ///
    /// - `Unsupported` if the port is not wired to this core
    /// - `WrongParam` if `config` cannot be programmed
    /// - `InitializationFailure` if a pin, clock gate or the UART block is
    ///   held elsewhere; the hardware is left untouched
    /// - `PeriphFailure` if the UART did not accept the settings; every
    ///   resource is handed back
    pub fn com_init(&mut self, port: ComPort, config: &ComConfig) -> Result<(), BspError> {
        self.check_com(port)?;
        if !config.is_valid() {
            return Err(BspError::WrongParam);
        }
        let desc = port.descriptor();
        if self.coms[port.index()].is_some() {
            return self.hal.init(desc.uart, config).map_err(BspError::from);
        }

        let mut resources: Vec<ResourceId, MAX_LEASE> = self.pin_resources(&[desc.tx, desc.rx]);
        if resources.push(desc.uart.resource()).is_err() {
            return Err(BspError::WrongParam);
        }
        let lease = self.ledger.acquire_all(self.arbiter, &resources)?;

        let clocks = self.core().manages_clocks();
        self.open_bank_clocks(&lease);
        if desc.backup_domain && clocks {
            self.hal.enable_backup_access();
        }
        self.hal.configure(desc.tx, PinConfig::uart_line(desc.tx_af));
        self.hal.configure(desc.rx, PinConfig::uart_line(desc.rx_af));
        if clocks {
            self.hal.enable(desc.uart.clock_gate());
        }

        if let Err(err) = self.hal.init(desc.uart, config) {
            error!("{port:?}: {} init failed: {err}", desc.uart);
            self.teardown_com(port);
            if let Err(release) = self.ledger.release_all(self.arbiter, lease) {
                error!("{port:?}: {release}");
            }
            return Err(BspError::PeriphFailure(err));
        }

        info!("{port:?} on {} initialized by {}", desc.uart, self.core());
        self.coms[port.index()] = Some(lease);
        Ok(())
    }

    /// Stop a COM port and release its resources.
    ///
    /// Resources are released even if the UART does not stop cleanly.
    ///
    /// # Errors
    ///
    /// - `Unsupported` if the port is not wired to this core
    /// - `NotInitialized` if the port was never initialized
    /// - `PeriphFailure` if the UART did not stop (reported first)
    /// - `ReleaseDenied` if the arbiter refused a release
    pub fn com_deinit(&mut self, port: ComPort) -> Result<(), BspError> {
        self.check_com(port)?;
        let lease = self.coms[port.index()]
            .take()
            .ok_or(BspError::NotInitialized)?;

        let desc = port.descriptor();
        let stopped = self.hal.deinit(desc.uart).map_err(BspError::from);
        if let Err(err) = &stopped {
            error!("{port:?}: {} deinit failed: {err}", desc.uart);
        }
        self.teardown_com(port);

        info!("{port:?} released by {}", self.core());
        let released = self.ledger.release_all(self.arbiter, lease);
        stopped.and(released)
    }

    /// Checks if a COM port is initialized on this core.
    #[must_use]
    pub const fn com_initialized(&self, port: ComPort) -> bool {
        self.coms[port.index()].is_some()
    }

    /// Route the console to another COM port.
    ///
    /// # Errors
    ///
    /// Returns `Unsupported` if the port is not wired to this core.
    pub fn select_log_port(&mut self, port: ComPort) -> Result<(), BspError> {
        self.check_com(port)?;
        self.config.log_port = port;
        Ok(())
    }

    /// Returns the port the console uses.
    #[must_use]
    pub const fn log_port(&self) -> ComPort {
        self.config.log_port
    }

    /// Open the console on the log port.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the log port was not initialized.
    pub fn console(&mut self) -> Result<Console<'_, H>, BspError> {
        let port = self.config.log_port;
        if !self.com_initialized(port) {
            return Err(BspError::NotInitialized);
        }
        Ok(Console::new(&mut self.hal, port.descriptor().uart))
    }

    fn check_com(&self, port: ComPort) -> Result<(), BspError> {
        if port.available_on(self.core()) {
            Ok(())
        } else {
            Err(BspError::Unsupported { core: self.core() })
        }
    }

    /// Return pins to reset and gate the UART kernel clock.
    fn teardown_com(&mut self, port: ComPort) {
        let desc = port.descriptor();
        self.hal.deconfigure(desc.tx);
        self.hal.deconfigure(desc.rx);
        if self.core().manages_clocks() {
            self.hal.disable(desc.uart.clock_gate());
        }
    }
}
