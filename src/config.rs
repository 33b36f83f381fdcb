//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the default conversion
//! settings in TOML format with platform-specific directory resolution.

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::export::OutputFormat;
use crate::models::MappingParams;
use crate::parser::GridFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Document layout written by `convert`
    pub format: OutputFormat,
    /// Pretty-print JSON
    pub pretty: bool,
    /// Width given to point samples (0 keeps points)
    pub sample_size: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            sample_size: 0.0,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LedMapper/config.toml`
/// - macOS: `~/Library/Application Support/LedMapper/config.toml`
/// - Windows: `%APPDATA%\LedMapper\config.toml`
///
/// `LEDMAPPER_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `depth`, `edge_bias` and `sample_size` must be within 0.0-1.0
/// - `boundary_token` must be non-empty, not a number, and free of the delimiter
/// - `delimiter` must be ASCII, and not a quote or alphanumeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Mapping defaults
    #[serde(default)]
    pub mapping: MappingParams,
    /// Input parsing defaults
    #[serde(default)]
    pub input: GridFormat,
    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `LEDMAPPER_CONFIG_DIR` when set, otherwise the platform config dir.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        check_unit("mapping.depth", self.mapping.depth)?;
        check_unit("mapping.edge_bias", self.mapping.edge_bias)?;
        check_unit("output.sample_size", self.output.sample_size)?;

        let delimiter = self.input.delimiter;
        if delimiter == '"' || !delimiter.is_ascii() || delimiter.is_ascii_alphanumeric() {
            anyhow::bail!("input.delimiter cannot be '{}'", delimiter);
        }

        let token = self.input.boundary_token.trim();
        if token.is_empty() {
            anyhow::bail!("input.boundary_token cannot be empty");
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!(
                "input.boundary_token '{}' would be read as an LED index",
                token
            );
        }
        if token.contains(delimiter) {
            anyhow::bail!(
                "input.boundary_token '{}' contains the delimiter '{}'",
                token,
                delimiter
            );
        }

        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("{} must be between 0.0 and 1.0, got {}", name, value);
    }
    Ok(())
}
