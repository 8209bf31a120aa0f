//! Packaging of extracted assets.
//!
//! Writes the manifest, every rendered vector document and any pre-existing
//! raster images into one zip archive (or into a directory of
//! loose files). The archive is written to a temporary file next to the
//! destination and moved into place once complete.

mod archive;
mod directory;
mod manifest;
mod options;
mod sink;
mod types;

pub use archive::ArchiveWriter;
pub use directory::DirectorySink;
pub use manifest::{MANIFEST_VERSION, ManifestContents, encode_manifest};
pub use options::{
    DEFAULT_MANIFEST_ENTRY, DEFAULT_MAX_RASTER_DIMENSION, PackageOptions, options_from_config,
};
pub use sink::{PackageSink, RasterAsset, RasterSink, VectorSink};
pub(crate) use sink::validate_entry_path;
pub use types::{PackageError, PackageSummary};

use crate::tree::SvgAsset;
use log::{debug, info, warn};
use std::fs::{self, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Everything that goes into one package.
#[derive(Debug, Clone, Copy)]
pub struct PackageContents<'a> {
    pub manifest: ManifestContents<'a>,
    pub vectors: &'a [SvgAsset],
    pub rasters: &'a [RasterAsset],
}

/// Writes the manifest, then vectors, then rasters into `sink`.
pub fn write_contents<S>(
    sink: &mut S,
    contents: &PackageContents<'_>,
    options: &PackageOptions,
) -> Result<(), PackageError>
where
    S: PackageSink + ?Sized,
{
    let manifest = encode_manifest(contents.manifest, options.pretty_manifest)?;
    sink.write_entry(&options.manifest_entry, &manifest)?;

    for asset in contents.vectors {
        sink.write_vector(&asset.path, &asset.document)?;
    }

    for raster in contents.rasters {
        check_raster_dimensions(raster, options.max_raster_dimension)?;
        sink.write_raster(raster)?;
    }

    Ok(())
}

/// Writes a complete `.zip` package to `path`.
pub fn save_package(
    path: &Path,
    contents: &PackageContents<'_>,
    options: &PackageOptions,
) -> Result<PackageSummary, PackageError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path);
    let result = save_package_inner(path, &tmp_path, contents, options);

    if result.is_err() && tmp_path.exists() {
        fs::remove_file(&tmp_path).unwrap_or_else(|err| {
            warn!(
                "failed to remove temporary package {}: {}",
                tmp_path.display(),
                err
            )
        });
    }

    result
}

fn save_package_inner(
    path: &Path,
    tmp_path: &Path,
    contents: &PackageContents<'_>,
    options: &PackageOptions,
) -> Result<PackageSummary, PackageError> {
    let tmp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)?;

    let mut writer = ArchiveWriter::new(BufWriter::new(tmp_file), options.compression);
    write_contents(&mut writer, contents, options)?;
    let entries = writer.entry_count();
    let file = writer
        .finish()?
        .into_inner()
        .map_err(|err| err.into_error())?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)?;

    let bytes = fs::metadata(path)?.len();
    info!(
        "Package saved to {} ({} entries, {} bytes)",
        path.display(),
        entries,
        bytes
    );

    Ok(PackageSummary {
        path: path.to_path_buf(),
        entries,
        vectors: contents.vectors.len(),
        rasters: contents.rasters.len(),
        bytes,
    })
}

/// Writes the package entries as loose files under `dir`.
pub fn export_directory(
    dir: &Path,
    contents: &PackageContents<'_>,
    options: &PackageOptions,
) -> Result<PackageSummary, PackageError> {
    fs::create_dir_all(dir)?;

    let mut sink = DirectorySink::new(dir);
    write_contents(&mut sink, contents, options)?;
    let entries = sink.entry_count();

    info!(
        "Exported {} entries to {} ({} bytes)",
        entries,
        dir.display(),
        sink.bytes_written()
    );

    Ok(PackageSummary {
        path: dir.to_path_buf(),
        entries,
        vectors: contents.vectors.len(),
        rasters: contents.rasters.len(),
        bytes: sink.bytes_written(),
    })
}

fn check_raster_dimensions(raster: &RasterAsset, max: u32) -> Result<(), PackageError> {
    let (width, height) = raster.image.dimensions();
    if width > max || height > max {
        return Err(PackageError::RasterTooLarge {
            path: raster.path.clone(),
            width,
            height,
            max,
        });
    }
    debug!("Raster {} is {}x{}", raster.path, width, height);
    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "package".to_string());

    let mut candidate = target.with_file_name(format!("{file_name}.tmp"));
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_file_name(format!("{file_name}.tmp{counter}"));
    }
    candidate
}
