// ABOUTME: Leveled logging facade.
// ABOUTME: Severity-filtered loggers that write "<prefix> <LEVEL:> args..." lines to a timestamping sink.

//! ```no_run
//! use leveled_log::{LeveledLogger, info};
//!
//! let logger = LeveledLogger::new("INFO", std::io::stderr(), "svc")
//!     .unwrap_or_else(|e| e.fallback());
//! info!(logger, "listening on", 8080);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod level;
pub mod logger;
mod macros;
pub mod sink;

#[cfg(test)]
mod test_utilities;

pub use config::{Destination, LoggerConfig, Loggers, load_config, parse_config};
pub use error::LogError;
pub use level::Level;
pub use logger::{LeveledLogger, Logger, fallback};
pub use sink::{Sink, Timestamp};
