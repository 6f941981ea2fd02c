// ABOUTME: TOML configuration for named loggers.
// ABOUTME: Parses [[logger]] tables and opens each one against its destination.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::logger::{LeveledLogger, fallback};
use crate::sink::Timestamp;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Stderr,
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub destination: Destination,
    #[serde(default)]
    pub timestamp: Timestamp,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    logger: Vec<LoggerConfig>,
}

impl LoggerConfig {
    /// Open the destination and build the logger.
    ///
    /// Unlike [`LeveledLogger::new_or_fallback`], a bad level name is an error
    /// here: a config file is the place to catch it.
    pub fn open(&self) -> Result<LeveledLogger> {
        let logger = match &self.destination {
            Destination::Stderr => LeveledLogger::with_timestamp(
                &self.level,
                std::io::stderr(),
                self.prefix.as_str(),
                self.timestamp,
            ),
            Destination::Stdout => LeveledLogger::with_timestamp(
                &self.level,
                std::io::stdout(),
                self.prefix.as_str(),
                self.timestamp,
            ),
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| {
                        format!("logger '{}': failed to open {}", self.name, path.display())
                    })?;
                LeveledLogger::with_timestamp(
                    &self.level,
                    file,
                    self.prefix.as_str(),
                    self.timestamp,
                )
            }
        }
        .with_context(|| format!("logger '{}'", self.name))?;

        debug!(
            logger = %self.name,
            threshold = %logger.threshold(),
            destination = ?self.destination,
            "opened logger"
        );
        Ok(logger)
    }
}

pub fn parse_config(toml_str: &str) -> Result<Vec<LoggerConfig>> {
    let file: ConfigFile = toml::from_str(toml_str).context("failed to parse logger config")?;
    Ok(file.logger)
}

pub fn load_config(path: &Path) -> Result<Vec<LoggerConfig>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Named loggers opened from configuration.
#[derive(Debug, Default)]
pub struct Loggers {
    by_name: HashMap<String, LeveledLogger>,
}

impl Loggers {
    pub fn from_configs(configs: &[LoggerConfig]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(configs.len());

        for config in configs {
            if by_name.contains_key(&config.name) {
                bail!("duplicate logger name '{}'", config.name);
            }
            by_name.insert(config.name.clone(), config.open()?);
        }

        info!(count = by_name.len(), "loggers configured");
        Ok(Self { by_name })
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_configs(&load_config(path)?)
    }

    /// The logger configured under `name`, or the CRITICAL-only fallback.
    pub fn get(&self, name: &str) -> LeveledLogger {
        self.by_name
            .get(name)
            .cloned()
            .unwrap_or_else(|| fallback().clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}
