//! Configuration type definitions.

use super::enums::CompressionSetting;
use crate::package::{DEFAULT_MANIFEST_ENTRY, DEFAULT_MAX_RASTER_DIMENSION};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Package layout settings.
///
/// Controls where entries land inside the archive and how it is compressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageConfig {
    /// Archive path of the JSON manifest (e.g., "nodes.json")
    #[serde(default = "default_manifest_entry")]
    pub manifest_entry: String,

    /// Directory inside the archive that receives the vector documents.
    /// An empty string places them at the archive root
    #[serde(default = "default_asset_directory")]
    pub asset_directory: String,

    /// Entry compression: "none", "fast", "default" or "best"
    #[serde(default)]
    pub compression: CompressionSetting,

    /// Indent the manifest JSON
    #[serde(default = "default_pretty_manifest")]
    pub pretty_manifest: bool,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            manifest_entry: default_manifest_entry(),
            asset_directory: default_asset_directory(),
            compression: CompressionSetting::default(),
            pretty_manifest: default_pretty_manifest(),
        }
    }
}

/// Raster asset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RasterConfig {
    /// Largest accepted width or height in pixels (valid range: 1 - 65535)
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
        }
    }
}

pub(super) fn default_manifest_entry() -> String {
    DEFAULT_MANIFEST_ENTRY.to_string()
}

pub(super) fn default_asset_directory() -> String {
    "assets".to_string()
}

fn default_pretty_manifest() -> bool {
    true
}

fn default_max_dimension() -> u32 {
    DEFAULT_MAX_RASTER_DIMENSION
}
