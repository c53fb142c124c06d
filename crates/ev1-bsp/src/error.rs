// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Board support errors.

use rif_abi::{CoreId, ResourceId};
use rif_arbiter::ArbitrationError;

use crate::hal::PeriphError;

/// Errors returned by board operations.
///
/// Each variant maps onto a stable numeric code (see [`BspError::code`]) for
/// callers that report status over a C-shaped interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BspError {
    /// The LED or COM port was never initialized on this core.
    #[error("peripheral not initialized")]
    NotInitialized,

    /// An argument was out of range.
    #[error("wrong parameter")]
    WrongParam,

    /// A peripheral driver failed after its resources were acquired.
    #[error("peripheral failure: {0}")]
    PeriphFailure(#[from] PeriphError),

    /// A resource could not be acquired; nothing was touched.
    #[error("cannot acquire {resource}: {source}")]
    InitializationFailure {
        /// The resource that was denied.
        resource: ResourceId,
        /// Why the arbiter denied it.
        source: ArbitrationError,
    },

    /// A resource could not be released.
    #[error("cannot release {resource}: {source}")]
    ReleaseDenied {
        /// The resource that was denied.
        resource: ResourceId,
        /// Why the arbiter denied it.
        source: ArbitrationError,
    },

    /// The feature is not wired to this core.
    #[error("not supported on {core}")]
    Unsupported {
        /// The calling core.
        core: CoreId,
    },
}

impl BspError {
    /// `BSP_ERROR_NO_INIT`
    pub const NO_INIT: i32 = -1;
    /// `BSP_ERROR_WRONG_PARAM`
    pub const WRONG_PARAM: i32 = -2;
    /// `BSP_ERROR_PERIPH_FAILURE`
    pub const PERIPH_FAILURE: i32 = -4;
    /// `BSP_ERROR_MSP_FAILURE`
    pub const MSP_FAILURE: i32 = -10;
    /// `BSP_ERROR_FEATURE_NOT_SUPPORTED`
    pub const FEATURE_NOT_SUPPORTED: i32 = -11;

    /// Returns the numeric status code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::NotInitialized => Self::NO_INIT,
            Self::WrongParam => Self::WRONG_PARAM,
            Self::PeriphFailure(_) => Self::PERIPH_FAILURE,
            Self::InitializationFailure { .. } | Self::ReleaseDenied { .. } => Self::MSP_FAILURE,
            Self::Unsupported { .. } => Self::FEATURE_NOT_SUPPORTED,
        }
    }
}

/// Collapse a result into a numeric status code (0 on success).
#[must_use]
pub fn status_code<T>(result: &Result<T, BspError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => err.code(),
    }
}
