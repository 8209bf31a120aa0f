//! Manifest entry: a self-describing JSON record of everything processed.

use super::types::PackageError;
use crate::capability::Element;
use crate::tree::ManifestNode;
use chrono::Utc;
use serde::Serialize;

pub const MANIFEST_VERSION: u32 = 1;

/// Body of the manifest, depending on which pipeline produced the package.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestContents<'a> {
    /// Processed node tree (tree pipeline)
    Nodes(&'a [ManifestNode]),
    /// Reconciled element list (capability pipeline)
    Elements(&'a [Element]),
}

#[derive(Debug, Serialize)]
struct ManifestFile<'a> {
    version: u32,
    generated_at: String,
    #[serde(flatten)]
    contents: ManifestContents<'a>,
}

/// Serialises the manifest, newline-terminated.
pub fn encode_manifest(
    contents: ManifestContents<'_>,
    pretty: bool,
) -> Result<Vec<u8>, PackageError> {
    let file = ManifestFile {
        version: MANIFEST_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        contents,
    };

    let mut bytes = if pretty {
        serde_json::to_vec_pretty(&file)?
    } else {
        serde_json::to_vec(&file)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}
