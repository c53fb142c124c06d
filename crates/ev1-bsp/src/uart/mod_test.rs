// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the console.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::ComConfig;
use crate::hal::MockHal;

fn ready_hal() -> MockHal {
    let mut hal = MockHal::new();
    hal.init(UartInstance::UART5, &ComConfig::DEFAULT).unwrap();
    hal
}

#[test]
fn write_line_ends_with_crlf() {
    let mut hal = ready_hal();
    let mut console = Console::new(&mut hal, UartInstance::UART5);
    console.write_line("boot");
    assert_eq!(console.tx_errors(), 0);
    assert_eq!(hal.tx_output(UartInstance::UART5), b"boot\r\n");
}

#[test]
fn write_to_stopped_uart_counts_errors() {
    let mut hal = MockHal::new();
    let mut console = Console::new(&mut hal, UartInstance::USART2);
    UartExt::write_str(&mut console, "ab");
    assert_eq!(console.tx_errors(), 2);
    assert!(!console.can_write());
}

#[test]
fn read_byte_returns_zero_on_timeout() {
    let mut hal = ready_hal();
    let mut console = Console::new(&mut hal, UartInstance::UART5);
    assert!(!console.can_read());
    assert_eq!(console.read_byte(), 0);
}

#[test]
fn read_line_echoes_and_handles_backspace() {
    let mut hal = ready_hal();
    hal.push_rx(UartInstance::UART5, b"lx\x7Fed\r");

    let mut console = Console::new(&mut hal, UartInstance::UART5);
    let mut buf = [0u8; 16];
    let len = console.read_line(&mut buf);

    assert_eq!(&buf[..len], b"led");
    assert_eq!(hal.tx_output(UartInstance::UART5), b"lx\x08 \x08ed\r\n");
}

#[test]
fn read_line_stops_at_timeout() {
    let mut hal = ready_hal();
    hal.push_rx(UartInstance::UART5, b"on");

    let mut console = Console::new(&mut hal, UartInstance::UART5);
    let mut buf = [0u8; 16];
    assert_eq!(console.read_line(&mut buf), 2);
    assert_eq!(&buf[..2], b"on");
}

#[test]
fn formatted_output() {
    use core::fmt::Write as _;

    let mut hal = ready_hal();
    let mut console = Console::new(&mut hal, UartInstance::UART5);
    write!(console, "cid {}", 2).unwrap();
    assert_eq!(hal.tx_output(UartInstance::UART5), b"cid 2");
}

#[test]
fn failed_line_counts_every_lost_byte() {
    let mut hal = MockHal::new();
    let mut console = Console::new(&mut hal, UartInstance::LPUART1);
    console.write_line("boot");
    assert_eq!(console.tx_errors(), 6);
    assert!(hal.tx_output(UartInstance::LPUART1).is_empty());
}

#[test]
fn read_line_drops_overflow_and_control_bytes() {
    let mut hal = ready_hal();
    hal.push_rx(UartInstance::UART5, b"c\x1bom12\n");

    let mut console = Console::new(&mut hal, UartInstance::UART5);
    let mut buf = [0u8; 3];
    let len = console.read_line(&mut buf);

    assert_eq!(&buf[..len], b"com");
    // Only accepted characters are echoed
    assert_eq!(hal.tx_output(UartInstance::UART5), b"com\r\n");
}

#[test]
fn backspace_on_empty_line_is_silent() {
    let mut hal = ready_hal();
    hal.push_rx(UartInstance::UART5, b"\x08\x7Fa\r");

    let mut console = Console::new(&mut hal, UartInstance::UART5);
    let mut buf = [0u8; 4];
    assert_eq!(console.read_line(&mut buf), 1);
    assert_eq!(hal.tx_output(UartInstance::UART5), b"a\r\n");
}
