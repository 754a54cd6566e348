//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--log`, resolved via [`AppConfig::resolve_log_path`])
//! 2. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log file used when `--log` is not given. Same fixed name the tool has
/// always defaulted to.
pub const DEFAULT_LOG_FILE: &str = "converter.log";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Conversion-record log settings.
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Where conversion records are appended.
    pub file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig {
                file: PathBuf::from(DEFAULT_LOG_FILE),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// Resolve the log path: an explicit `--log` flag wins over the
    /// configured default.
    pub fn resolve_log_path(&self, flag: Option<&PathBuf>) -> PathBuf {
        flag.cloned().unwrap_or_else(|| self.log.file.clone())
    }
}
