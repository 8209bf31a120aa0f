use crate::config::Config;
use crate::tree::DirectoryNaming;
use crate::config::CompressionSetting;

pub const DEFAULT_MANIFEST_ENTRY: &str = "nodes.json";
pub const DEFAULT_MAX_RASTER_DIMENSION: u32 = 16_384;

/// Runtime options derived from configuration for package writing.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    pub manifest_entry: String,
    pub asset_directory: String,
    pub compression: CompressionSetting,
    pub pretty_manifest: bool,
    pub max_raster_dimension: u32,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            manifest_entry: DEFAULT_MANIFEST_ENTRY.to_string(),
            asset_directory: "assets".to_string(),
            compression: CompressionSetting::default(),
            pretty_manifest: true,
            max_raster_dimension: DEFAULT_MAX_RASTER_DIMENSION,
        }
    }
}

impl PackageOptions {
    /// Naming collaborator placing assets under the configured directory.
    pub fn naming(&self) -> DirectoryNaming {
        DirectoryNaming::new(self.asset_directory.clone())
    }
}

/// Build runtime package options from configuration values.
pub fn options_from_config(config: &Config) -> PackageOptions {
    PackageOptions {
        manifest_entry: config.package.manifest_entry.clone(),
        asset_directory: config.package.asset_directory.clone(),
        compression: config.package.compression,
        pretty_manifest: config.package.pretty_manifest,
        max_raster_dimension: config.raster.max_dimension,
    }
}
