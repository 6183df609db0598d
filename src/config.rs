// src/config.rs

//! Defines the configuration structures for the pixel-matrix editor.
//!
//! Settings are deserialized from a JSON file. Every section carries
//! `#[serde(default)]`, so a file only needs the keys it wants to change.
//!
//! Lookup order for the file: the path in `PIXEL_MATRIX_CONFIG`, then
//! `pixel-matrix.json` in the working directory, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::pixel::{Pixel, DEFAULT_PIXEL};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PIXEL_MATRIX_CONFIG";

/// Config file picked up from the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "pixel-matrix.json";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Grid creation settings.
    pub grid: GridConfig,
    /// Interactive session behavior.
    pub session: SessionConfig,
    /// Saved file format.
    pub output: OutputConfig,
    /// Logger settings for the binary.
    pub logging: LoggingConfig,
}

// --- Grid Configuration ---

/// Settings applied when `I` creates a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pixel every cell starts with.
    pub default_pixel: Pixel,
    /// Largest width `I` accepts.
    pub max_width: usize,
    /// Largest height `I` accepts.
    pub max_height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            default_pixel: DEFAULT_PIXEL,
            max_width: 4096,
            max_height: 4096,
        }
    }
}

// --- Session Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prompt printed before each command is read.
    pub prompt: String,
    /// Print the command list when the session starts.
    pub show_help_on_start: bool,
    /// Treat blank lines as `EmptyCommand` errors instead of ignoring them.
    pub reject_blank_lines: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: "Enter command: ".to_string(),
            show_help_on_start: true,
            reject_blank_lines: false,
        }
    }
}

// --- Output Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Append a final `\n` to saved files.
    pub trailing_newline: bool,
}

// --- Logging Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parses config JSON. Missing keys fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid config JSON")
    }

    /// Loads the config from the usual locations, falling back to defaults.
    ///
    /// A file that exists but cannot be parsed is reported and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}. Using default config.", e);
                Config::default()
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.grid.default_pixel, DEFAULT_PIXEL);
        assert_eq!(config.session.prompt, "Enter command: ");
        assert!(config.session.show_help_on_start);
        assert!(!config.session.reject_blank_lines);
        assert!(!config.output.trailing_newline);
        assert_eq!(config.logging.default_filter, "warn");
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config =
            Config::from_json(r##"{ "grid": { "default_pixel": "." }, "output": { "trailing_newline": true } }"##)
                .unwrap();
        assert_eq!(config.grid.default_pixel.as_char(), '.');
        assert_eq!(config.grid.max_width, 4096);
        assert!(config.output.trailing_newline);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Config::from_json("{ not json").is_err());
        assert!(Config::from_json(r#"{ "grid": { "max_width": "wide" } }"#).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/pixel-matrix.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/pixel-matrix.json"));
    }
}
