//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.
//! Command-line flags override whatever is loaded here.

use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DIFF_TIMEOUT_MS, MAX_INPUT_CHARS,
};
use crate::report::{HighlightColor, OutputFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Per-side input ceiling in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Milliseconds the diff may spend before settling for a non-minimal
    /// edit script, 0 disables the limit
    #[serde(default = "default_diff_timeout_ms")]
    pub diff_timeout_ms: u64,

    /// Colour scheme of highlighted spans in HTML reports
    #[serde(default)]
    pub highlight_color: HighlightColor,

    /// Report format written when no flag overrides it
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_max_input_chars() -> usize {
    MAX_INPUT_CHARS
}

fn default_diff_timeout_ms() -> u64 {
    DIFF_TIMEOUT_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_input_chars: MAX_INPUT_CHARS,
            diff_timeout_ms: DIFF_TIMEOUT_MS,
            highlight_color: HighlightColor::default(),
            output_format: OutputFormat::default(),
        }
    }
}
