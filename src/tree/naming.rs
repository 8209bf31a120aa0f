//! Destination paths for rendered assets.

use super::node::Node;
use crate::util::sanitize_identifier;

/// Decides where a rendered node's vector document lands inside the package.
///
/// The extraction pipeline only asks for paths; it never builds them itself.
pub trait AssetNaming {
    fn asset_path_of(&self, node: &Node) -> String;
}

/// Places every asset under one directory, named after the node id.
#[derive(Debug, Clone)]
pub struct DirectoryNaming {
    directory: String,
}

impl DirectoryNaming {
    /// `directory` is trimmed of surrounding slashes; an empty directory puts
    /// assets at the package root.
    pub fn new(directory: impl Into<String>) -> Self {
        let directory = directory.into();
        Self {
            directory: directory.trim_matches('/').to_string(),
        }
    }

    /// Path for an asset with the given file stem.
    pub fn path_for_stem(&self, stem: &str) -> String {
        if self.directory.is_empty() {
            format!("{stem}.svg")
        } else {
            format!("{}/{stem}.svg", self.directory)
        }
    }
}

impl Default for DirectoryNaming {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl AssetNaming for DirectoryNaming {
    fn asset_path_of(&self, node: &Node) -> String {
        self.path_for_stem(&sanitize_identifier(&node.id))
    }
}

impl<F> AssetNaming for F
where
    F: Fn(&Node) -> String,
{
    fn asset_path_of(&self, node: &Node) -> String {
        self(node)
    }
}
