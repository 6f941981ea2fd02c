// ABOUTME: Error type for logger construction.
// ABOUTME: The only failure is an unrecognised level name, which still yields a usable fallback.

use thiserror::Error;

use crate::logger::{LeveledLogger, fallback};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),
}

impl LogError {
    /// The process-wide CRITICAL-only logger bound to stderr.
    ///
    /// Callers that do not want to treat a bad level name as fatal can keep
    /// going with this instead: `LeveledLogger::new(..).unwrap_or_else(|e| e.fallback())`.
    pub fn fallback(&self) -> LeveledLogger {
        fallback().clone()
    }
}
