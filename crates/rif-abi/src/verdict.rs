// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Arbitration verdicts and boot mode.

use core::fmt;

/// Result of a request or release.
///
/// Verdicts are computed per call and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum AccessVerdict {
    /// The caller holds (or no longer holds) the resource as asked.
    Granted,
    /// The arbiter refused the call; ownership is unchanged.
    Denied,
}

impl AccessVerdict {
    /// Checks if the call was granted.
    #[inline]
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Checks if the call was denied.
    #[inline]
    #[must_use]
    pub const fn is_denied(self) -> bool {
        matches!(self, Self::Denied)
    }
}

impl From<bool> for AccessVerdict {
    fn from(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}

impl fmt::Display for AccessVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Process-wide arbitration policy, fixed at startup.
///
/// In `Developer` mode the isolation hardware is not active and ownership is
/// not tracked: every request and release is granted and conflicts are the
/// operator's responsibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootMode {
    /// Arbitration enforced.
    #[default]
    Production,
    /// Arbitration bypassed.
    Developer,
}

impl BootMode {
    /// Checks if ownership is enforced in this mode.
    #[inline]
    #[must_use]
    pub const fn is_enforced(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Checks if this is the developer (bypass) mode.
    #[inline]
    #[must_use]
    pub const fn is_developer(self) -> bool {
        matches!(self, Self::Developer)
    }
}

impl fmt::Display for BootMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Developer => write!(f, "developer"),
        }
    }
}
