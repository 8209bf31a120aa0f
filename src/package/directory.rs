//! Loose-file output: writes package entries under a directory.

use super::sink::{EntrySet, PackageSink};
use super::types::PackageError;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Writes each entry to `<root>/<entry path>`, creating parent directories.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    entries: EntrySet,
    bytes_written: u64,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: EntrySet::default(),
            bytes_written: 0,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl PackageSink for DirectorySink {
    fn write_entry(&mut self, path: &str, bytes: &[u8]) -> Result<(), PackageError> {
        self.entries.claim(path)?;

        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, bytes)?;
        self.bytes_written += bytes.len() as u64;

        debug!("Wrote {} ({} bytes)", target.display(), bytes.len());
        Ok(())
    }
}
