//! Zip archive writer.

use super::sink::{EntrySet, PackageSink};
use super::types::PackageError;
use crate::config::CompressionSetting;
use chrono::{Datelike, Timelike, Utc};
use log::debug;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{DateTime, ZipWriter};

/// Streams package entries into a `.zip` container.
///
/// Each entry is written as soon as it is received; duplicate paths are
/// rejected before anything is written for them. Every entry shares the
/// timestamp taken when the writer was created.
pub struct ArchiveWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    entries: EntrySet,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> ArchiveWriter<W> {
    pub fn new(inner: W, compression: CompressionSetting) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(compression.method())
            .compression_level(compression.level())
            .last_modified_time(archive_timestamp())
            .unix_permissions(0o644);

        Self {
            zip: ZipWriter::new(inner),
            entries: EntrySet::default(),
            options,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Writes the central directory and returns the inner writer.
    pub fn finish(self) -> Result<W, PackageError> {
        Ok(self.zip.finish()?)
    }
}

impl<W: Write + Seek> PackageSink for ArchiveWriter<W> {
    fn write_entry(&mut self, path: &str, bytes: &[u8]) -> Result<(), PackageError> {
        self.entries.claim(path)?;

        self.zip.start_file(path, self.options)?;
        self.zip.write_all(bytes)?;

        debug!("Archived {} ({} bytes)", path, bytes.len());
        Ok(())
    }
}

// Zip timestamps cannot represent dates before 1980; fall back to that epoch.
fn archive_timestamp() -> DateTime {
    let now = Utc::now();
    u16::try_from(now.year())
        .ok()
        .and_then(|year| {
            DateTime::from_date_and_time(
                year,
                now.month() as u8,
                now.day() as u8,
                now.hour() as u8,
                now.minute() as u8,
                now.second().min(59) as u8,
            )
            .ok()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::{CompressionMethod, ZipArchive};

    fn read_entries(bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|index| {
                let mut file = archive.by_index(index).unwrap();
                let mut data = Vec::new();
                file.read_to_end(&mut data).unwrap();
                (file.name().to_string(), data)
            })
            .collect()
    }

    fn finish(writer: ArchiveWriter<Cursor<Vec<u8>>>) -> Vec<u8> {
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn entries_round_trip_in_write_order() {
        let mut writer = ArchiveWriter::new(Cursor::new(Vec::new()), CompressionSetting::Fast);
        writer.write_entry("nodes.json", b"{}\n").unwrap();
        writer.write_entry("assets/a.svg", b"<svg/>").unwrap();
        assert_eq!(writer.entry_count(), 2);

        let entries = read_entries(finish(writer));
        assert_eq!(
            entries,
            vec![
                ("nodes.json".to_string(), b"{}\n".to_vec()),
                ("assets/a.svg".to_string(), b"<svg/>".to_vec()),
            ]
        );
    }

    #[test]
    fn compression_setting_selects_method() {
        let mut stored = ArchiveWriter::new(Cursor::new(Vec::new()), CompressionSetting::None);
        stored.write_entry("a.svg", &[b'x'; 256]).unwrap();
        let mut deflated = ArchiveWriter::new(Cursor::new(Vec::new()), CompressionSetting::Best);
        deflated.write_entry("a.svg", &[b'x'; 256]).unwrap();

        let mut stored = ZipArchive::new(Cursor::new(finish(stored))).unwrap();
        assert_eq!(
            stored.by_index(0).unwrap().compression(),
            CompressionMethod::Stored
        );
        let mut deflated = ZipArchive::new(Cursor::new(finish(deflated))).unwrap();
        let file = deflated.by_index(0).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Deflated);
        assert!(file.compressed_size() < file.size());
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let mut writer = ArchiveWriter::new(Cursor::new(Vec::new()), CompressionSetting::Default);
        writer.write_entry("assets/a.svg", b"one").unwrap();
        let err = writer.write_entry("assets/a.svg", b"two").unwrap_err();
        assert!(matches!(err, PackageError::DuplicateEntry(_)));

        let entries = read_entries(finish(writer));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, b"one");
    }

    #[test]
    fn traversal_paths_are_rejected() {
        let mut writer = ArchiveWriter::new(Cursor::new(Vec::new()), CompressionSetting::None);
        assert!(matches!(
            writer.write_entry("../x.svg", b""),
            Err(PackageError::InvalidEntryPath(_))
        ));
    }
}
