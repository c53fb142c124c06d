// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Core type definitions for resource and core identities.
//!
//! These newtypes prevent accidentally mixing a pin number with a clock gate
//! index or a UART instance at compile time.

mod core_id;
mod pin;
mod resource;


pub use core_id::CoreId;
pub use pin::{GpioBank, Pin};
pub use resource::{ResourceId, ResourceKind};
