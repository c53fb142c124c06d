// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Byte-level console over the log COM port.
//!
//! [`Uart`] is the byte interface; [`UartExt`] adds string and line
//! helpers on top of it. [`Console`] implements [`Uart`] on the UART block
//! behind the board's log port, so `write_line` ends up on the terminal
//! attached to that port.

#[cfg(test)]
mod mod_test;

use core::fmt;

use crate::hal::{UartController, UartInstance};

/// How long a console write waits for the transmitter.
pub const COM_POLL_TIMEOUT_MS: u32 = 1000;

/// How long a console read waits for a byte (effectively forever).
pub const COM_RX_TIMEOUT_MS: u32 = 0xFFFF_FFFF;

/// Line terminator sent to serial terminals.
const CRLF: &[u8] = b"\r\n";

/// Erases the character left of the cursor on a terminal.
const RUBOUT: &[u8] = b"\x08 \x08";

const BS: u8 = 0x08;
const DEL: u8 = 0x7F;

/// Byte-level serial I/O.
pub trait Uart {
    /// Send one byte.
    fn write_byte(&mut self, byte: u8);

    /// Send a run of bytes.
    ///
    /// Implementations backed by a block transmitter should override this
    /// to hand the whole run over at once.
    fn write_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.write_byte(byte);
        }
    }

    /// Wait for one byte.
    fn read_byte(&mut self) -> u8;

    /// Check if a received byte is waiting.
    fn can_read(&self) -> bool;

    /// Check if the transmitter accepts more data.
    fn can_write(&self) -> bool;
}

/// Text helpers for any [`Uart`].
pub trait UartExt: Uart {
    /// Send a string as is.
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Send a string terminated with CR LF.
    fn write_line(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
        self.write_bytes(CRLF);
    }

    /// Read an edited line of printable ASCII into `buf`.
    ///
    /// Typed characters are echoed and BS/DEL rub out the last one. The
    /// line ends at CR or LF (answered with CR LF) or when the port
    /// reports a receive timeout as a 0 byte. Characters past the end of
    /// `buf` are dropped. Returns the line length.
    fn read_line(&mut self, buf: &mut [u8]) -> usize {
        let mut len = 0;
        loop {
            match self.read_byte() {
                0 => return len,
                b'\r' | b'\n' => {
                    self.write_bytes(CRLF);
                    return len;
                }
                BS | DEL => {
                    if len > 0 {
                        len -= 1;
                        self.write_bytes(RUBOUT);
                    }
                }
                byte @ 0x20..=0x7E => {
                    if let Some(slot) = buf.get_mut(len) {
                        *slot = byte;
                        len += 1;
                        self.write_byte(byte);
                    }
                }
                _ => {}
            }
        }
    }
}

impl<T: Uart + ?Sized> UartExt for T {}

/// The console bound to one initialized UART block.
///
/// Obtained from [`Board::console`](crate::board::Board::console), which
/// checks that the log port is initialized on this core.
pub struct Console<'h, H> {
    hal: &'h mut H,
    uart: UartInstance,
    tx_errors: u32,
}

impl<'h, H: UartController> Console<'h, H> {
    pub(crate) const fn new(hal: &'h mut H, uart: UartInstance) -> Self {
        Self {
            hal,
            uart,
            tx_errors: 0,
        }
    }

    /// Returns the UART block behind the console.
    #[must_use]
    pub const fn uart(&self) -> UartInstance {
        self.uart
    }

    /// Returns the number of bytes that could not be sent.
    #[must_use]
    pub const fn tx_errors(&self) -> u32 {
        self.tx_errors
    }
}

impl<H: UartController> Uart for Console<'_, H> {
    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    /// One transmit per run; a failed run counts all of its bytes as lost.
    fn write_bytes(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        if self.hal.transmit(self.uart, data, COM_POLL_TIMEOUT_MS).is_err() {
            let lost = u32::try_from(data.len()).unwrap_or(u32::MAX);
            self.tx_errors = self.tx_errors.saturating_add(lost);
        }
    }

    /// Returns 0 if nothing arrived before the timeout.
    fn read_byte(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        match self.hal.receive(self.uart, &mut buf, COM_RX_TIMEOUT_MS) {
            Ok(1) => buf[0],
            _ => 0,
        }
    }

    fn can_read(&self) -> bool {
        self.hal.rx_ready(self.uart)
    }

    fn can_write(&self) -> bool {
        self.hal.tx_ready(self.uart)
    }
}

impl<H: UartController> fmt::Write for Console<'_, H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
