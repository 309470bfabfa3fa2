//! Configuration management
//!
//! This module handles loading, parsing, and validation of the
//! `repscount.toml` configuration file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::datetime;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Ring the terminal bell on chip selection changes
    pub haptics_enabled: bool,
    /// Ask before deleting a record
    pub confirm_delete: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Format for section header dates
    pub date_format: String,
    /// Format for row time-of-day stamps
    pub time_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            confirm_delete: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::SECTION_DATE_FORMAT.to_string(),
            time_format: datetime::TIME_SHORT_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file()? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Locate the config file, if one exists.
    ///
    /// Looks for `repscount.toml` in the current directory first, then in
    /// the platform config directory.
    pub fn find_config_file() -> Result<Option<PathBuf>> {
        let local = PathBuf::from("repscount.toml");
        if local.is_file() {
            return Ok(Some(local));
        }

        if let Some(base) = dirs::config_dir() {
            let path = base.join("repscount").join("repscount.toml");
            if path.is_file() {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// Check config values for consistency.
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => bail!("Invalid logging.level '{other}' (expected trace, debug, info, warn, or error)"),
        }

        if self.display.date_format.is_empty() {
            bail!("display.date_format must not be empty");
        }
        if self.display.time_format.is_empty() {
            bail!("display.time_format must not be empty");
        }

        Ok(())
    }

    /// The configured log level as a `log::LevelFilter`.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.logging.level.as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        }
    }
}
