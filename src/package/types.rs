//! Error and summary types for packaging.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a package.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Duplicate package entry: {0}")]
    DuplicateEntry(String),

    #[error("Invalid package entry path: {0:?}")]
    InvalidEntryPath(String),

    #[error("Raster asset {path} is {width}x{height}, exceeding the {max}px limit")]
    RasterTooLarge {
        path: String,
        width: u32,
        height: u32,
        max: u32,
    },

    #[error("Failed to write package: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write zip archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to encode raster asset: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to serialise manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// What a finished package contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Archive file or output directory
    pub path: PathBuf,
    /// Total entries including the manifest
    pub entries: usize,
    pub vectors: usize,
    pub rasters: usize,
    /// Bytes on disk (archive size, or sum of written files)
    pub bytes: u64,
}
