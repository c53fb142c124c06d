// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # STM32MP257F-EV1 Board Support
//!
//! LEDs, COM ports and a serial console for the STM32MP257F-EV1, usable from
//! any of the three cores at once.
//!
//! Every peripheral initializer follows the same contract:
//!
//! 1. request every resource the peripheral depends on from the shared
//!    [`Arbiter`](rif_arbiter::Arbiter)
//! 2. program hardware only once all of them are granted
//! 3. on the first denial hand back what this attempt took and fail with
//!    [`BspError::InitializationFailure`]
//! 4. on deinit release everything, whatever the hardware teardown says
//!
//! ```text
//! Board (one per core) ──> LeaseLedger ──> Arbiter (shared) ──> IsolationAuthority
//!        │
//!        └──> Hal (GPIO, RCC, PWR, UART)    only after every grant
//! ```
//!
//! ## `no_std` Support
//!
//! The default `std` feature enables [`hal::MockHal`] for host testing.
//! Firmware images build with `default-features = false` and are `no_std`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(test)]
mod lease_test;

pub mod board;
pub mod config;
pub mod error;
pub mod hal;
pub mod info;
pub mod lease;
pub mod logger;
pub mod uart;

pub use board::{Board, ComPort, Led};
pub use config::{BoardConfig, ComConfig};
pub use error::{BspError, status_code};
pub use info::{board_id, board_name, bsp_version};
pub use lease::{Lease, LeaseLedger};
pub use logger::ConsoleLogger;
pub use uart::{Console, Uart, UartExt};
