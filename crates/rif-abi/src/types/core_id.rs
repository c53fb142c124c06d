// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Core identities.

use core::fmt;

/// Identifies which core of the SoC is making a request.
///
/// A firmware image runs as exactly one `CoreId`, fixed per build. The
/// discriminant is the RIF compartment ID the isolation hardware assigns to
/// the core's bus transactions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CoreId {
    /// Cortex-A35 application processor cluster.
    Ca35 = 1,
    /// Cortex-M33 real-time co-processor.
    Cm33 = 2,
    /// Cortex-M0+ low-power microcontroller in the always-on domain.
    Cm0Plus = 3,
}

impl CoreId {
    /// All cores sharing the SoC.
    pub const ALL: [Self; 3] = [Self::Ca35, Self::Cm33, Self::Cm0Plus];

    /// Try to convert from a RIF compartment ID.
    #[must_use]
    pub const fn from_cid(cid: u8) -> Option<Self> {
        match cid {
            1 => Some(Self::Ca35),
            2 => Some(Self::Cm33),
            3 => Some(Self::Cm0Plus),
            _ => None,
        }
    }

    /// Returns the RIF compartment ID.
    #[inline]
    #[must_use]
    pub const fn cid(self) -> u8 {
        self as u8
    }

    /// Returns the core name as printed in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ca35 => "CA35",
            Self::Cm33 => "CM33",
            Self::Cm0Plus => "CM0+",
        }
    }

    /// Checks if the core can program the RCC (clock gates, supplies).
    ///
    /// The Cortex-M0+ has no access to the RCC; everything it uses must be
    /// clocked by another core.
    #[inline]
    #[must_use]
    pub const fn manages_clocks(self) -> bool {
        !matches!(self, Self::Cm0Plus)
    }
}

impl fmt::Debug for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoreId({})", self.name())
    }
}

impl fmt::Display for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(cid:{})", self.name(), self.cid())
    }
}
