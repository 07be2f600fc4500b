// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Runtime configuration with defaults, an optional JSON file, and env overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::credential::MIN_IDENTIFIER_LEN;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "RESEARCH_ARCHIVE_CONFIG";
/// Environment variable overriding [`AppConfig::store_dir`].
pub const STORE_DIR_ENV: &str = "RESEARCH_ARCHIVE_STORE_DIR";

/// Size ceiling advertised to users (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Application settings. Missing JSON keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving stored submissions.
    pub store_dir: PathBuf,
    /// Minimum trimmed identifier length accepted by the gate.
    pub min_identifier_len: usize,
    /// Advertised document size ceiling in bytes.
    pub max_file_size: u64,
    /// Reject documents above `max_file_size` instead of only advertising it.
    pub enforce_size_limit: bool,
    /// Delay of the simulated reset mailer.
    pub reset_delay_ms: u64,
    /// Upper bound for a password reset request.
    pub reset_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("research-archive"),
            min_identifier_len: MIN_IDENTIFIER_LEN,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            enforce_size_limit: false,
            reset_delay_ms: 1000,
            reset_timeout_ms: 10_000,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads the JSON file named by `RESEARCH_ARCHIVE_CONFIG` when set, then
    /// applies `RESEARCH_ARCHIVE_STORE_DIR`.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(STORE_DIR_ENV) {
            config.store_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// Parse a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("Failed to parse config JSON")?;
        if config.min_identifier_len == 0 {
            anyhow::bail!("min_identifier_len must be at least 1");
        }
        Ok(config)
    }

    /// Size ceiling to enforce, if enforcement is enabled.
    pub fn size_limit(&self) -> Option<u64> {
        self.enforce_size_limit.then_some(self.max_file_size)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn reset_timeout(&self) -> Duration {
        Duration::from_millis(self.reset_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_follow_current_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.min_identifier_len, 3);
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert_eq!(config.size_limit(), None);
        assert_eq!(config.reset_delay(), Duration::from_secs(1));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            AppConfig::from_json(r#"{ "enforce_size_limit": true, "store_dir": "/srv/archive" }"#)
                .unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/srv/archive"));
        assert_eq!(config.size_limit(), Some(DEFAULT_MAX_FILE_SIZE));
        assert_eq!(config.reset_timeout_ms, 10_000);
    }

    #[test]
    fn zero_identifier_length_is_rejected() {
        assert!(AppConfig::from_json(r#"{ "min_identifier_len": 0 }"#).is_err());
    }

    #[test]
    fn from_file_reports_path_on_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();

        assert!(format!("{err:#}").contains("config.json"));
    }
}
