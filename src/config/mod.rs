//! Configuration file support for figpack.
//!
//! Settings are read from `~/.config/figpack/config.toml` (or a path given on
//! the command line). If no config file exists, defaults are used.

pub mod enums;
pub mod types;

pub use enums::CompressionSetting;
pub use types::{PackageConfig, RasterConfig};

use crate::package::validate_entry_path;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [package]
/// manifest_entry = "nodes.json"
/// asset_directory = "assets"
/// compression = "best"
/// pretty_manifest = false
///
/// [raster]
/// max_dimension = 8192
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Archive layout and compression
    #[serde(default)]
    pub package: PackageConfig,

    /// Raster asset limits
    #[serde(default)]
    pub raster: RasterConfig,
}

impl Config {
    /// Validates and clamps configuration values, logging a warning for each
    /// value replaced.
    ///
    /// - `manifest_entry` must be a valid relative archive path
    /// - `asset_directory` must be empty or a valid relative archive path
    /// - `raster.max_dimension`: 1 - 65535
    fn validate_and_clamp(&mut self) {
        if validate_entry_path(&self.package.manifest_entry).is_err() {
            warn!(
                "Invalid manifest_entry '{}', falling back to '{}'",
                self.package.manifest_entry,
                types::default_manifest_entry()
            );
            self.package.manifest_entry = types::default_manifest_entry();
        }

        let asset_directory = self.package.asset_directory.trim_end_matches('/');
        if !asset_directory.is_empty() && validate_entry_path(asset_directory).is_err() {
            warn!(
                "Invalid asset_directory '{}', falling back to '{}'",
                self.package.asset_directory,
                types::default_asset_directory()
            );
            self.package.asset_directory = types::default_asset_directory();
        }

        if !(1..=65_535).contains(&self.raster.max_dimension) {
            warn!(
                "Invalid raster max_dimension {}, clamping to 1-65535 range",
                self.raster.max_dimension
            );
            self.raster.max_dimension = self.raster.max_dimension.clamp(1, 65_535);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("figpack");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> Schema {
        schema_for!(Config)
    }
}
