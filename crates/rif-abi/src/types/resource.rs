// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Resource identities.
//!
//! A `ResourceId` names one physical resource instance independent of the
//! core that asks for it. Identities are compile-time constants; nothing
//! creates or destroys them at runtime.
//!
//! # Packed Layout
//!
//! | Bits  | Content          |
//! |-------|------------------|
//! | 16-23 | `ResourceKind`   |
//! | 0-15  | index within kind |

use core::fmt;

use super::pin::Pin;

/// The class of a physical resource.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum ResourceKind {
    /// A single GPIO line (index = flat pin index).
    GpioPin = 1,
    /// An RCC clock gate bit (index = RCC gate number).
    ClockGate = 2,
    /// A UART/USART/LPUART block (index = RIFSC peripheral ID).
    UartInstance = 3,
    /// A whole isolation compartment or power domain.
    IsolationDomain = 4,
}

impl ResourceKind {
    /// Try to convert from a raw value.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::GpioPin),
            2 => Some(Self::ClockGate),
            3 => Some(Self::UartInstance),
            4 => Some(Self::IsolationDomain),
            _ => None,
        }
    }

    /// Short prefix used in the display form.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::GpioPin => "gpio",
            Self::ClockGate => "rcc",
            Self::UartInstance => "uart",
            Self::IsolationDomain => "domain",
        }
    }
}

/// Identity of one physical resource.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId {
    kind: ResourceKind,
    index: u16,
}

impl ResourceId {
    /// Creates a resource identity.
    #[inline]
    #[must_use]
    pub const fn new(kind: ResourceKind, index: u16) -> Self {
        Self { kind, index }
    }

    /// Identity of a GPIO line.
    #[inline]
    #[must_use]
    pub const fn gpio(pin: Pin) -> Self {
        Self::new(ResourceKind::GpioPin, pin.index())
    }

    /// Identity of an RCC clock gate.
    #[inline]
    #[must_use]
    pub const fn clock_gate(gate: u16) -> Self {
        Self::new(ResourceKind::ClockGate, gate)
    }

    /// Identity of a UART instance, by RIFSC peripheral ID.
    #[inline]
    #[must_use]
    pub const fn uart(rifsc_id: u16) -> Self {
        Self::new(ResourceKind::UartInstance, rifsc_id)
    }

    /// Identity of an isolation domain.
    #[inline]
    #[must_use]
    pub const fn isolation_domain(domain: u16) -> Self {
        Self::new(ResourceKind::IsolationDomain, domain)
    }

    /// Returns the resource kind.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ResourceKind {
        self.kind
    }

    /// Returns the index within the kind.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.index
    }

    /// Returns the pin if this is a GPIO identity.
    #[must_use]
    pub const fn as_pin(self) -> Option<Pin> {
        match self.kind {
            ResourceKind::GpioPin => Pin::from_index(self.index),
            _ => None,
        }
    }

    /// Packs the identity into a single word for the isolation authority.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        ((self.kind as u32) << 16) | self.index as u32
    }

    /// Unpacks an identity produced by [`Self::as_u32`].
    #[must_use]
    pub const fn from_u32(raw: u32) -> Option<Self> {
        if raw >> 24 != 0 {
            return None;
        }
        match ResourceKind::from_u8((raw >> 16) as u8) {
            Some(kind) => Some(Self::new(kind, (raw & 0xFFFF) as u16)),
            None => None,
        }
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({self})")
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_pin() {
            Some(pin) => write!(f, "{}:{pin}", self.kind.prefix()),
            None => write!(f, "{}:{}", self.kind.prefix(), self.index),
        }
    }
}
