// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # RIF Arbiter
//!
//! Request/release gatekeeper for SoC resources shared between the
//! Cortex-A35, Cortex-M33 and Cortex-M0+ firmware images.
//!
//! Before a core touches a GPIO line, a clock gate or a UART block that a
//! sibling core could also claim, it asks the [`Arbiter`]. The arbiter keeps
//! an ownership table (at most one owner per resource), confirms first
//! claims with the hardware [`IsolationAuthority`], and answers with an
//! [`AccessVerdict`](rif_abi::AccessVerdict).
//!
//! The [`BootMode`](rif_abi::BootMode) is fixed when the arbiter is built.
//! In developer boot the isolation hardware is off and every call is
//! granted without bookkeeping.
//!
//! ## `no_std` Support
//!
//! The default `std` feature enables [`MockAuthority`] for host testing.
//! Firmware images build with `default-features = false` and are `no_std`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;


pub mod arbiter;
pub mod authority;
pub mod boot;
pub mod error;
pub mod ownership;

pub use arbiter::Arbiter;
#[cfg(any(test, feature = "std"))]
pub use authority::{AuthorityCall, MockAuthority};
pub use authority::IsolationAuthority;
pub use boot::{BootStrap, DEVELOPER_BOOT_PINS, resolve_boot_mode};
pub use error::ArbitrationError;
pub use ownership::{MAX_TRACKED, OwnershipTable};
