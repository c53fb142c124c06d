// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Board identification.

/// BSP version components (main, sub1, sub2, release candidate).
pub const BSP_VERSION: (u8, u8, u8, u8) = (1, 0, 0, 0);

/// Board marketing name.
pub const BOARD_NAME: &str = "STM32MP257F-EV1";

/// Board part number.
pub const BOARD_ID: &str = "MB1936";

/// Returns the BSP version packed as `0xXXYYZZRR`.
#[must_use]
pub const fn bsp_version() -> u32 {
    let (main, sub1, sub2, rc) = BSP_VERSION;
    u32::from_be_bytes([main, sub1, sub2, rc])
}

/// Returns the board name.
#[must_use]
pub const fn board_name() -> &'static str {
    BOARD_NAME
}

/// Returns the board part number.
#[must_use]
pub const fn board_id() -> &'static str {
    BOARD_ID
}
