// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared definitions for resource arbitration on the STM32MP2 SoC.
//!
//! Every core that links a firmware image (Cortex-A35, Cortex-M33,
//! Cortex-M0+) uses the same identities when talking to the resource
//! arbiter:
//! - Resource identities (GPIO pins, RCC clock gates, UART instances,
//!   isolation domains)
//! - Core identities, numbered like the RIF compartment IDs
//! - Boot mode and access verdicts
//!
//! # Design Principles
//!
//! - **No dependencies**: Pure data types, 100% host-testable
//! - **`no_std`**: the standard library is only linked for unit tests
//! - **Static identities**: Nothing here is created or destroyed at runtime
//!
//! # Modules
//!
//! - [`types`]: `ResourceId`, `ResourceKind`, `Pin`, `GpioBank`, `CoreId`
//! - [`verdict`]: `AccessVerdict` and `BootMode`

#![cfg_attr(not(test), no_std)]

pub mod types;
pub mod verdict;

// Re-export commonly used types at crate root
pub use types::{CoreId, GpioBank, Pin, ResourceId, ResourceKind};
pub use verdict::{AccessVerdict, BootMode};
