//! Application configuration.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Display tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Book levels shown per snapshot side. Default: 5.
    #[serde(default = "default_book_depth")]
    pub book_depth: usize,
    /// Identifier characters shown before truncation. Default: 20.
    #[serde(default = "default_id_width")]
    pub id_width: usize,
}

fn default_book_depth() -> usize {
    5
}

fn default_id_width() -> usize {
    polyscan_core::ID_DISPLAY_WIDTH
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            book_depth: default_book_depth(),
            id_width: default_id_width(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory the collector writes datasets into. Default: `data`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Resolution order: explicit path, `POLYSCAN_CONFIG` env var,
    /// `config/default.toml`. An explicit path must exist; for the others a
    /// missing file falls back to defaults.
    pub fn load(explicit: Option<&str>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let config_path = std::env::var("POLYSCAN_CONFIG")
            .unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::debug!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse config: {e}")))
    }
}
