// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! `log` backend writing to a character sink.
//!
//! Lines are formatted as `[LEVEL target] message` and terminated with
//! CR LF for serial terminals.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU32, Ordering};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

/// Logger writing formatted records to `W`.
pub struct ConsoleLogger<W> {
    sink: Mutex<W>,
    level: Mutex<LevelFilter>,
    dropped: AtomicU32,
}

impl<W: Write + Send> ConsoleLogger<W> {
    /// Creates a logger passing records up to `level`.
    pub const fn new(sink: W, level: LevelFilter) -> Self {
        Self {
            sink: Mutex::new(sink),
            level: Mutex::new(level),
            dropped: AtomicU32::new(0),
        }
    }

    /// Returns the current level filter.
    pub fn level(&self) -> LevelFilter {
        *self.level.lock()
    }

    /// Changes the level filter, here and in the `log` facade.
    pub fn set_level(&self, level: LevelFilter) {
        *self.level.lock() = level;
        log::set_max_level(level);
    }

    /// Returns the number of records the sink refused.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Run `f` on the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.sink.lock())
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already installed.
    pub fn install(&'static self) -> Result<(), SetLoggerError>
    where
        W: 'static,
    {
        log::set_logger(self)?;
        log::set_max_level(self.level());
        Ok(())
    }

    fn write_record(sink: &mut W, record: &Record<'_>) -> fmt::Result {
        write!(
            sink,
            "[{} {}] {}\r\n",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl<W: Write + Send> Log for ConsoleLogger<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if Self::write_record(&mut self.sink.lock(), record).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn flush(&self) {}
}
