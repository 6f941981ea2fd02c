// ABOUTME: Severity levels and their fixed total order.
// ABOUTME: Parses the six accepted level names and renders the per-line level marker.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Severity rank. Declaration order is the rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Critical,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Critical => "CRITICAL",
        }
    }

    /// Tag written after the prefix on every emitted line.
    pub fn marker(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG:",
            Level::Info => "INFO:",
            Level::Warn => "WARN:",
            Level::Error => "ERROR:",
            Level::Fatal => "FATAL:",
            Level::Critical => "CRITICAL:",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    // Names are case-sensitive: "info" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LogError::InvalidLogLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_rank() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Critical);
    }

    #[test]
    fn all_is_sorted() {
        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);
    }

    #[test]
    fn parse_every_name() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "info".parse::<Level>().unwrap_err();
        assert_eq!(err, LogError::InvalidLogLevel("info".to_string()));
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert!("TRACE".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
        assert!(" INFO".parse::<Level>().is_err());
    }

    #[test]
    fn markers() {
        assert_eq!(Level::Debug.marker(), "DEBUG:");
        assert_eq!(Level::Info.marker(), "INFO:");
        assert_eq!(Level::Warn.marker(), "WARN:");
        assert_eq!(Level::Error.marker(), "ERROR:");
        assert_eq!(Level::Fatal.marker(), "FATAL:");
    }

    #[test]
    fn display_is_bare_name() {
        assert_eq!(Level::Critical.to_string(), "CRITICAL");
    }
}
