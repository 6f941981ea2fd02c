// ABOUTME: Threshold-filtered logger that prefixes each line with a tag and level marker.
// ABOUTME: Also holds the process-wide CRITICAL-only fallback used when construction fails.

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::{Arc, LazyLock};

use crate::error::LogError;
use crate::level::Level;
use crate::sink::{Sink, Timestamp};

/// The five emitters shared by every logger.
///
/// Arguments are rendered with `Display` and joined by single spaces.
/// Prefer the `debug!`..`fatal!` macros, which build the slice for you.
pub trait Logger {
    fn debug(&self, args: &[&dyn fmt::Display]);
    fn info(&self, args: &[&dyn fmt::Display]);
    fn warn(&self, args: &[&dyn fmt::Display]);
    fn error(&self, args: &[&dyn fmt::Display]);

    /// Emit at FATAL, then exit the process with status 1.
    ///
    /// Exit only happens if the line was emitted: a logger whose threshold
    /// is above FATAL returns normally.
    fn fatal(&self, args: &[&dyn fmt::Display]);
}

#[derive(Debug, Clone)]
pub struct LeveledLogger {
    threshold: Level,
    prefix: String,
    sink: Arc<Sink>,
}

static FALLBACK: LazyLock<LeveledLogger> =
    LazyLock::new(|| LeveledLogger::from_sink(Level::Critical, Arc::new(Sink::stderr()), ""));

/// Process-wide logger handed out when a level name is rejected.
///
/// Threshold CRITICAL, no prefix, writes to stderr. Never mutated after first use.
pub fn fallback() -> &'static LeveledLogger {
    &FALLBACK
}

impl LeveledLogger {
    /// Build a logger writing locally-timestamped lines to `destination`.
    ///
    /// `level` must be one of `DEBUG`, `INFO`, `WARN`, `ERROR`, `FATAL` or
    /// `CRITICAL`, matched case-sensitively.
    pub fn new<W>(level: &str, destination: W, prefix: impl Into<String>) -> Result<Self, LogError>
    where
        W: Write + Send + 'static,
    {
        Self::with_timestamp(level, destination, prefix, Timestamp::Local)
    }

    pub fn with_timestamp<W>(
        level: &str,
        destination: W,
        prefix: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<Self, LogError>
    where
        W: Write + Send + 'static,
    {
        let threshold: Level = level.parse()?;
        Ok(Self::from_sink(
            threshold,
            Arc::new(Sink::new(destination, timestamp)),
            prefix,
        ))
    }

    /// Like [`LeveledLogger::new`], but never leaves the caller without a logger.
    ///
    /// On a bad level name the fallback instance comes back together with the error.
    pub fn new_or_fallback<W>(
        level: &str,
        destination: W,
        prefix: impl Into<String>,
    ) -> (Self, Option<LogError>)
    where
        W: Write + Send + 'static,
    {
        match Self::new(level, destination, prefix) {
            Ok(logger) => (logger, None),
            Err(e) => (e.fallback(), Some(e)),
        }
    }

    /// Build a logger on an existing sink, e.g. to give several prefixes one destination.
    pub fn from_sink(threshold: Level, sink: Arc<Sink>, prefix: impl Into<String>) -> Self {
        Self {
            threshold,
            prefix: prefix.into(),
            sink,
        }
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Returns whether the line was written.
    fn emit(&self, level: Level, args: &[&dyn fmt::Display]) -> bool {
        if !self.enabled(level) {
            return false;
        }
        self.sink.write_line(&self.format_line(level, args));
        true
    }

    fn format_line(&self, level: Level, args: &[&dyn fmt::Display]) -> String {
        let mut line = String::with_capacity(self.prefix.len() + 16);
        line.push_str(&self.prefix);
        line.push(' ');
        line.push_str(level.marker());
        for arg in args {
            line.push(' ');
            // A Display impl reporting an error leaves whatever it wrote so far.
            let _ = write!(line, "{arg}");
        }
        line
    }
}

impl Logger for LeveledLogger {
    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.emit(Level::Debug, args);
    }

    fn info(&self, args: &[&dyn fmt::Display]) {
        self.emit(Level::Info, args);
    }

    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.emit(Level::Warn, args);
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        self.emit(Level::Error, args);
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        if self.emit(Level::Fatal, args) {
            std::process::exit(1);
        }
    }
}
