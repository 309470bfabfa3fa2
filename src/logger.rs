//! Logging utilities.
//!
//! Two layers: an in-memory session [`Logger`] that feeds the logs dialog,
//! and optional file logging via `fern`, initialized once at startup from
//! the config.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::Config;

/// Shared session logger that can be cloned across components.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry. Entries also go to the `log` facade so they land in
    /// the log file when file logging is enabled.
    pub fn log(&self, message: String) {
        log::debug!(target: "session", "{message}");

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted = format!("[{timestamp}] {message}");

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted);
        }
    }

    /// Get all session logs, newest first.
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted = logs.clone();
            sorted.reverse();
            sorted
        } else {
            Vec::new()
        }
    }

    /// Number of entries recorded this session.
    pub fn len(&self) -> usize {
        self.logs.lock().map_or(0, |logs| logs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all session logs.
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Location of the log file.
pub fn log_file_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine platform data directory")?;
    Ok(base.join("repscount").join("repscount.log"))
}

/// Wire the `log` facade to a file when config enables it.
///
/// Must be called at most once, before any UI starts; `fern` owns the global
/// logger from here on.
pub fn init_file_logging(config: &Config) -> Result<()> {
    if !config.logging.enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(config.log_level())
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install file logger")?;

    Ok(())
}
