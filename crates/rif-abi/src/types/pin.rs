// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! GPIO bank and pin types.

use core::fmt;

/// Number of pins in one GPIO bank.
pub const PINS_PER_BANK: u8 = 16;

/// RCC clock gate index of the first GPIO bank (GPIOA).
const GPIOA_CLOCK_GATE: u16 = 90;

/// A GPIO bank on the SoC.
///
/// Banks A through K live in the main power domain, bank Z in the
/// always-on domain. The discriminant is the bank's position in the RCC
/// clock gate table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum GpioBank {
    /// GPIOA
    A = 0,
    /// GPIOB
    B = 1,
    /// GPIOC
    C = 2,
    /// GPIOD
    D = 3,
    /// GPIOE
    E = 4,
    /// GPIOF
    F = 5,
    /// GPIOG
    G = 6,
    /// GPIOH
    H = 7,
    /// GPIOI
    I = 8,
    /// GPIOJ
    J = 9,
    /// GPIOK
    K = 10,
    /// GPIOZ (always-on domain)
    Z = 11,
}

impl GpioBank {
    /// All banks in clock gate order.
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::Z,
    ];

    /// Try to convert from the bank ordinal.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the bank ordinal (A = 0).
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the RCC clock gate index feeding this bank.
    #[inline]
    #[must_use]
    pub const fn clock_gate(self) -> u16 {
        GPIOA_CLOCK_GATE + self as u16
    }

    /// Returns the bank letter as used in pin names (`PH4`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::I => 'I',
            Self::J => 'J',
            Self::K => 'K',
            Self::Z => 'Z',
        }
    }
}

/// A single GPIO line, addressed as a bank/pin pair.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin {
    bank: GpioBank,
    number: u8,
}

impl Pin {
    /// Creates a pin.
    ///
    /// Returns `None` if `number` is not below `PINS_PER_BANK`.
    #[inline]
    #[must_use]
    pub const fn new(bank: GpioBank, number: u8) -> Option<Self> {
        if number < PINS_PER_BANK {
            Some(Self { bank, number })
        } else {
            None
        }
    }

    /// Creates a pin for a compile-time board table.
    ///
    /// Evaluation in a `const` item turns an out-of-range number into a
    /// build error.
    #[expect(
        clippy::panic,
        reason = "only evaluated in const board tables where it fails the build"
    )]
    #[must_use]
    pub const fn fixed(bank: GpioBank, number: u8) -> Self {
        match Self::new(bank, number) {
            Some(pin) => pin,
            None => panic!("GPIO pin number out of range"),
        }
    }

    /// Decodes a pin from its flat index (`bank * 16 + number`).
    #[must_use]
    pub const fn from_index(index: u16) -> Option<Self> {
        let bank_ordinal = index / PINS_PER_BANK as u16;
        if bank_ordinal > u8::MAX as u16 {
            return None;
        }
        match GpioBank::from_u8(bank_ordinal as u8) {
            Some(bank) => Some(Self {
                bank,
                number: (index % PINS_PER_BANK as u16) as u8,
            }),
            None => None,
        }
    }

    /// Returns the bank.
    #[inline]
    #[must_use]
    pub const fn bank(self) -> GpioBank {
        self.bank
    }

    /// Returns the pin number within the bank.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Returns the single-bit mask of this pin within its bank.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u16 {
        1 << self.number
    }

    /// Returns the flat pin index used as the resource index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.bank as u16 * PINS_PER_BANK as u16 + self.number as u16
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin(P{}{})", self.bank.letter(), self.number)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.bank.letter(), self.number)
    }
}
