//! Output boundaries: where vector documents and raster images are written.

use super::types::PackageError;
use crate::draw::{VectorDocument, encode_svg};
use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;

/// Accepts raw entries at package-relative paths.
///
/// Implementations must reject a path that was already written.
pub trait PackageSink {
    fn write_entry(&mut self, path: &str, bytes: &[u8]) -> Result<(), PackageError>;
}

/// Accepts one vector document per rendered result.
pub trait VectorSink {
    fn write_vector(&mut self, path: &str, document: &VectorDocument) -> Result<(), PackageError>;
}

/// Accepts pre-existing bitmap assets.
pub trait RasterSink {
    fn write_raster(&mut self, asset: &RasterAsset) -> Result<(), PackageError>;
}

impl<S: PackageSink + ?Sized> VectorSink for S {
    fn write_vector(&mut self, path: &str, document: &VectorDocument) -> Result<(), PackageError> {
        let svg = encode_svg(document)?;
        self.write_entry(path, svg.as_bytes())
    }
}

impl<S: PackageSink + ?Sized> RasterSink for S {
    fn write_raster(&mut self, asset: &RasterAsset) -> Result<(), PackageError> {
        let png = asset.encode_png()?;
        self.write_entry(&asset.path, &png)
    }
}

/// A bitmap to be stored as PNG at `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterAsset {
    pub path: String,
    pub image: RgbaImage,
}

impl RasterAsset {
    pub fn new(path: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    /// Decodes an image file from disk.
    pub fn load(path: impl Into<String>, file: &Path) -> Result<Self> {
        let image = image::open(file)
            .with_context(|| format!("failed to read raster asset {}", file.display()))?
            .to_rgba8();
        Ok(Self::new(path, image))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, PackageError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Tracks claimed entry paths for one package.
#[derive(Debug, Default)]
pub(crate) struct EntrySet {
    seen: HashSet<String>,
}

impl EntrySet {
    /// Validates `path` and records it; fails on reuse.
    pub(crate) fn claim(&mut self, path: &str) -> Result<(), PackageError> {
        validate_entry_path(path)?;
        if !self.seen.insert(path.to_string()) {
            return Err(PackageError::DuplicateEntry(path.to_string()));
        }
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

/// Entry paths must be relative, non-empty and free of empty, `.` and `..`
/// segments.
pub(crate) fn validate_entry_path(path: &str) -> Result<(), PackageError> {
    let invalid = || PackageError::InvalidEntryPath(path.to_string());

    if path.contains('\\') {
        return Err(invalid());
    }

    // Splitting on '/' keeps empty and "." segments that Path::components drops.
    let all_normal = path
        .split('/')
        .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
    if all_normal { Ok(()) } else { Err(invalid()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn entry_paths_must_stay_inside_package() {
        assert!(validate_entry_path("assets/1_2.svg").is_ok());
        assert!(validate_entry_path("nodes.json").is_ok());
        assert!(validate_entry_path("").is_err());
        assert!(validate_entry_path("/etc/passwd").is_err());
        assert!(validate_entry_path("../escape.svg").is_err());
        assert!(validate_entry_path("assets/./x.svg").is_err());
        assert!(validate_entry_path("assets\\x.svg").is_err());
        assert!(validate_entry_path("assets//x.svg").is_err());
    }

    #[test]
    fn entry_set_rejects_duplicates() {
        let mut entries = EntrySet::default();
        entries.claim("a.svg").unwrap();
        let err = entries.claim("a.svg").unwrap_err();
        assert!(matches!(err, PackageError::DuplicateEntry(ref p) if p == "a.svg"));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn png_encoding_produces_png_signature() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let asset = RasterAsset::new("img/pixel.png", image);
        let png = asset.encode_png().expect("encode");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
        assert_eq!(decoded.get_pixel(1, 1), &Rgba([1, 2, 3, 255]));
    }
}
