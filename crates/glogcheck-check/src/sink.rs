//! Console sink
//!
//! Owns the process-wide minimum level and the writer. Lines are written
//! under a mutex so concurrent emits never interleave. The level gates
//! ordinary records only; `emit_unfiltered` bypasses it.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use glogcheck_core::{Formatter, Level, LogEvent};

pub struct Sink {
    formatter: Formatter,
    min_level: AtomicU8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Sink {
    /// Sink writing to standard error.
    pub fn stderr(formatter: Formatter) -> Self {
        Self::with_writer(formatter, Box::new(io::stderr()))
    }

    pub fn with_writer(formatter: Formatter, writer: Box<dyn Write + Send>) -> Self {
        Self {
            formatter,
            min_level: AtomicU8::new(Level::INFO.severity()),
            writer: Mutex::new(writer),
        }
    }

    pub fn configure(&self, min_level: Level) {
        self.min_level.store(min_level.severity(), Ordering::Relaxed);
    }

    pub fn min_level(&self) -> Level {
        Level::new(self.min_level.load(Ordering::Relaxed))
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }

    /// Render and write one event. Events below the minimum level are dropped.
    pub fn emit(&self, event: &LogEvent) -> io::Result<()> {
        if !self.enabled(event.level) {
            return Ok(());
        }
        self.emit_unfiltered(event)
    }

    /// Render and write one event regardless of the minimum level.
    /// Check failures always reach the console through this path.
    pub fn emit_unfiltered(&self, event: &LogEvent) -> io::Result<()> {
        let line = self.formatter.render(event);
        // a panic while holding the lock leaves the writer usable
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("formatter", &self.formatter)
            .field("min_level", &self.min_level())
            .finish_non_exhaustive()
    }
}
