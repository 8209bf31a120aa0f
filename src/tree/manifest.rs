//! Manifest description of a processed node tree.

use super::node::Node;
use crate::util::Rect;
use serde::Serialize;

/// One node as recorded in the package manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestNode {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub visible: bool,
    pub bounds: Rect,
    /// Package path of the node's vector document, when it was rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ManifestNode>,
}

impl ManifestNode {
    /// Entry for `node`, with its own asset path and already-described
    /// children.
    pub(crate) fn describe(
        node: &Node,
        asset: Option<String>,
        children: Vec<ManifestNode>,
    ) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.label().to_string(),
            visible: node.visible,
            bounds: node.bounds,
            asset,
            children,
        }
    }
}
