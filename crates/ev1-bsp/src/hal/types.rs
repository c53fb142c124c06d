// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Value types passed to the HAL traits.

use core::fmt;

use rif_abi::ResourceId;

/// Logic level of a GPIO line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Pin reset (0).
    Low,
    /// Pin set (1).
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Pin function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
    /// Push-pull output.
    Output,
    /// Alternate function push-pull, with the AF number (0-15).
    Alternate(u8),
    /// Analog (reset state).
    Analog,
}

/// Internal pull resistor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pull {
    /// No pull.
    None,
    /// Pull-up.
    Up,
    /// Pull-down.
    Down,
}

/// Output slew rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speed {
    /// Low speed.
    Low,
    /// Medium speed.
    Medium,
    /// High speed.
    High,
    /// Very high speed.
    VeryHigh,
}

/// Complete pin programming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Function.
    pub mode: PinMode,
    /// Pull resistor.
    pub pull: Pull,
    /// Slew rate.
    pub speed: Speed,
}

impl PinConfig {
    /// LED drive: push-pull output, pull-up, very high speed.
    pub const LED_OUTPUT: Self = Self {
        mode: PinMode::Output,
        pull: Pull::Up,
        speed: Speed::VeryHigh,
    };

    /// UART line: alternate function push-pull, pull-up, high speed.
    #[must_use]
    pub const fn uart_line(af: u8) -> Self {
        Self {
            mode: PinMode::Alternate(af),
            pull: Pull::Up,
            speed: Speed::High,
        }
    }
}

/// Independent I/O supplies switched by the PWR block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IoSupply {
    /// VDDIO1 (SDMMC1 bank)
    Vddio1,
    /// VDDIO2 (SDMMC2 bank)
    Vddio2,
    /// VDDIO3 (OCTOSPI bank)
    Vddio3,
    /// VDDIO4 (SDMMC3 bank)
    Vddio4,
}

/// One UART block, identified by its RIFSC peripheral ID.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UartInstance {
    name: &'static str,
    rifsc_id: u16,
    clock_gate: u16,
}

impl UartInstance {
    /// USART2, console of the Cortex-A35.
    pub const USART2: Self = Self::new("USART2", 33, 75);

    /// UART5, console of the Cortex-M33.
    pub const UART5: Self = Self::new("UART5", 36, 78);

    /// LPUART1 in the always-on domain, console of the Cortex-M0+.
    pub const LPUART1: Self = Self::new("LPUART1", 40, 86);

    /// Describes a UART block.
    #[must_use]
    pub const fn new(name: &'static str, rifsc_id: u16, clock_gate: u16) -> Self {
        Self {
            name,
            rifsc_id,
            clock_gate,
        }
    }

    /// Returns the block name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns the RIFSC peripheral ID.
    #[must_use]
    pub const fn rifsc_id(self) -> u16 {
        self.rifsc_id
    }

    /// Returns the RCC gate of the block's kernel clock.
    #[must_use]
    pub const fn clock_gate(self) -> u16 {
        self.clock_gate
    }

    /// Returns the arbitrated identity of the block.
    #[must_use]
    pub const fn resource(self) -> ResourceId {
        ResourceId::uart(self.rifsc_id)
    }
}

impl fmt::Debug for UartInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UartInstance({})", self.name)
    }
}

impl fmt::Display for UartInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Failure reported by a peripheral driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PeriphError {
    /// The operation did not complete in time.
    #[error("peripheral timeout")]
    Timeout,
    /// The peripheral is in use.
    #[error("peripheral busy")]
    Busy,
    /// The peripheral reported an error.
    #[error("peripheral hardware error")]
    Hardware,
}
