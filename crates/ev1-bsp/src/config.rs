// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Board configuration.
//!
//! Everything here is fixed before the first arbitration call: which core
//! this image runs on, which COM port carries the log, and the default
//! serial line settings.

use rif_abi::CoreId;

use crate::board::ComPort;

/// UART data bits per frame (including parity).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordLength {
    /// 7 bits.
    Bits7,
    /// 8 bits.
    Bits8,
    /// 9 bits.
    Bits9,
}

/// UART stop bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopBits {
    /// 0.5 stop bit.
    Half,
    /// 1 stop bit.
    One,
    /// 1.5 stop bits.
    OneAndHalf,
    /// 2 stop bits.
    Two,
}

/// UART parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    /// No parity bit.
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

/// UART hardware flow control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HwFlowControl {
    /// No flow control.
    None,
    /// RTS only.
    Rts,
    /// CTS only.
    Cts,
    /// RTS and CTS.
    RtsCts,
}

/// Serial line settings of a COM port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComConfig {
    /// Baud rate in bit/s.
    pub baud_rate: u32,
    /// Data bits.
    pub word_length: WordLength,
    /// Stop bits.
    pub stop_bits: StopBits,
    /// Parity.
    pub parity: Parity,
    /// Flow control.
    pub flow_control: HwFlowControl,
}

impl ComConfig {
    /// 115200 baud, 8N1, no flow control.
    pub const DEFAULT: Self = Self {
        baud_rate: 115_200,
        word_length: WordLength::Bits8,
        stop_bits: StopBits::One,
        parity: Parity::None,
        flow_control: HwFlowControl::None,
    };

    /// Returns the same settings at another baud rate.
    #[must_use]
    pub const fn with_baud_rate(self, baud_rate: u32) -> Self {
        Self { baud_rate, ..self }
    }

    /// Checks if the settings can be programmed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.baud_rate != 0
    }
}

impl Default for ComConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Static configuration of one firmware image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// The core this image runs on.
    pub core: CoreId,
    /// COM port the console shim reads from and writes to.
    pub log_port: ComPort,
}

impl BoardConfig {
    /// Configuration for `core`, logging on the COM port wired to it.
    #[must_use]
    pub const fn for_core(core: CoreId) -> Self {
        Self {
            core,
            log_port: ComPort::dedicated_to(core),
        }
    }

    /// Returns the configuration with another log port.
    #[must_use]
    pub const fn with_log_port(self, log_port: ComPort) -> Self {
        Self { log_port, ..self }
    }
}
