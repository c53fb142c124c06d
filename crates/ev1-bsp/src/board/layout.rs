// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! STM32MP257F-EV1 wiring of LEDs and COM ports.
//!
//! | Peripheral | Signal | Pin  | Clock gate | Notes                  |
//! |------------|--------|------|------------|------------------------|
//! | LED1       | out    | PH4  | 97         | active low             |
//! | LED2       | out    | PD8  | 93         | active high, VDDIO3    |
//! | COM1       | TX/RX  | PA4/PA8 | 90      | USART2, Cortex-A35     |
//! | COM2       | TX/RX  | PG9/PG10 | 96     | UART5, Cortex-M33      |
//! | COM3       | TX/RX  | PZ5/PZ6 | 101     | LPUART1, Cortex-M0+    |

use rif_abi::{CoreId, GpioBank, Pin, ResourceId};

use crate::error::BspError;
use crate::hal::{IoSupply, Level, UartInstance};

/// Number of user LEDs.
pub const LED_COUNT: usize = 2;

/// Number of COM ports.
pub const COM_COUNT: usize = 3;

/// User LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Led {
    /// LED1 (blue)
    Led1,
    /// LED2 (red)
    Led2,
}

/// Wiring of one LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedDescriptor {
    /// Driving pin.
    pub pin: Pin,
    /// Level that lights the LED.
    pub on: Level,
    /// Supply that must be switched on in developer boot.
    pub supply: Option<IoSupply>,
}

impl LedDescriptor {
    /// Level that turns the LED off.
    #[must_use]
    pub const fn off(&self) -> Level {
        self.on.toggled()
    }
}

const LED1: LedDescriptor = LedDescriptor {
    pin: Pin::fixed(GpioBank::H, 4),
    on: Level::Low,
    supply: None,
};

const LED2: LedDescriptor = LedDescriptor {
    pin: Pin::fixed(GpioBank::D, 8),
    on: Level::High,
    supply: Some(IoSupply::Vddio3),
};

impl Led {
    /// All LEDs.
    pub const ALL: [Self; LED_COUNT] = [Self::Led1, Self::Led2];

    /// Returns the LED's slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Led1 => 0,
            Self::Led2 => 1,
        }
    }

    /// Returns the LED's wiring.
    #[must_use]
    pub const fn descriptor(self) -> &'static LedDescriptor {
        match self {
            Self::Led1 => &LED1,
            Self::Led2 => &LED2,
        }
    }
}

/// COM ports (virtual COM over ST-LINK plus the M0+ header).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComPort {
    /// USART2, wired to the Cortex-A35 console.
    Com1,
    /// UART5, wired to the Cortex-M33 console.
    Com2,
    /// LPUART1, wired to the Cortex-M0+ console.
    Com3,
}

/// Wiring of one COM port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComDescriptor {
    /// UART block.
    pub uart: UartInstance,
    /// Transmit pin.
    pub tx: Pin,
    /// Transmit alternate function.
    pub tx_af: u8,
    /// Receive pin.
    pub rx: Pin,
    /// Receive alternate function.
    pub rx_af: u8,
    /// The block lives in the backup domain.
    pub backup_domain: bool,
}

const COM1: ComDescriptor = ComDescriptor {
    uart: UartInstance::USART2,
    tx: Pin::fixed(GpioBank::A, 4),
    tx_af: 6,
    rx: Pin::fixed(GpioBank::A, 8),
    rx_af: 8,
    backup_domain: false,
};

const COM2: ComDescriptor = ComDescriptor {
    uart: UartInstance::UART5,
    tx: Pin::fixed(GpioBank::G, 9),
    tx_af: 5,
    rx: Pin::fixed(GpioBank::G, 10),
    rx_af: 5,
    backup_domain: false,
};

const COM3: ComDescriptor = ComDescriptor {
    uart: UartInstance::LPUART1,
    tx: Pin::fixed(GpioBank::Z, 5),
    tx_af: 6,
    rx: Pin::fixed(GpioBank::Z, 6),
    rx_af: 6,
    backup_domain: true,
};

impl ComDescriptor {
    /// Pin resources plus the UART block.
    #[must_use]
    pub const fn resources(&self) -> [ResourceId; 3] {
        [
            ResourceId::gpio(self.tx),
            ResourceId::gpio(self.rx),
            self.uart.resource(),
        ]
    }
}

impl ComPort {
    /// All COM ports.
    pub const ALL: [Self; COM_COUNT] = [Self::Com1, Self::Com2, Self::Com3];

    /// Look up a port by its index.
    ///
    /// # Errors
    ///
    /// Returns `WrongParam` for an index past the last port.
    pub const fn from_index(index: usize) -> Result<Self, BspError> {
        if index < COM_COUNT {
            Ok(Self::ALL[index])
        } else {
            Err(BspError::WrongParam)
        }
    }

    /// Returns the port's slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Com1 => 0,
            Self::Com2 => 1,
            Self::Com3 => 2,
        }
    }

    /// Returns the port's wiring.
    #[must_use]
    pub const fn descriptor(self) -> &'static ComDescriptor {
        match self {
            Self::Com1 => &COM1,
            Self::Com2 => &COM2,
            Self::Com3 => &COM3,
        }
    }

    /// Returns the port wired to `core`'s console.
    #[must_use]
    pub const fn dedicated_to(core: CoreId) -> Self {
        match core {
            CoreId::Ca35 => Self::Com1,
            CoreId::Cm33 => Self::Com2,
            CoreId::Cm0Plus => Self::Com3,
        }
    }

    /// Checks if `core` can reach this port at all.
    ///
    /// The Cortex-M0+ only sees the always-on domain.
    #[must_use]
    pub const fn available_on(self, core: CoreId) -> bool {
        match core {
            CoreId::Ca35 | CoreId::Cm33 => true,
            CoreId::Cm0Plus => matches!(self, Self::Com3),
        }
    }
}

/// Checks if `core` can drive the user LEDs.
///
/// The LED banks are outside the Cortex-M0+'s reach.
#[must_use]
pub const fn leds_available_on(core: CoreId) -> bool {
    !matches!(core, CoreId::Cm0Plus)
}
