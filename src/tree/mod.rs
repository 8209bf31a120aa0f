//! Pipeline over a design-tool node tree.
//!
//! Nodes are read from the design file, walked children-first, and every
//! visible, painted, non-text node becomes one vector document. A manifest
//! describing the whole tree accompanies the documents in the package.

pub mod extract;
pub mod manifest;
pub mod naming;
pub mod node;

pub use extract::{
    Eligibility, Extraction, SvgAsset, eligibility, extract, extract_with_manifest, render_node,
};
pub use manifest::ManifestNode;
pub use naming::{AssetNaming, DirectoryNaming};
pub use node::{Node, NodeKind, Paint, PaintKind, load_design, parse_design};
