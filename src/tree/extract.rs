//! Traversal and eligibility for the node-tree pipeline.
//!
//! Children are visited before their parent, so a child's asset always
//! precedes its ancestor's in the output. Invisible nodes produce nothing for
//! themselves but their descendants are still visited. Nodes that produce no
//! shape are simply omitted from the assets; the manifest still lists them.

use super::manifest::ManifestNode;
use super::naming::AssetNaming;
use super::node::{Node, NodeKind};
use crate::draw::VectorDocument;
use crate::render::{apply_corner_radius, apply_fill, apply_stroke, build_shape};
use log::debug;

/// A rendered node: its vector document and package destination.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgAsset {
    pub node_id: String,
    pub document: VectorDocument,
    pub path: String,
}

/// Outcome of the eligibility rules for one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// Text layers are never drawn as shapes, whatever their paints
    Text,
    /// Node kind has no rectangle rendition
    Unsupported,
    /// Neither fills nor strokes present
    Unpainted,
}

/// Applies the eligibility rules in order; the first match wins.
pub fn eligibility(node: &Node) -> Eligibility {
    match node.kind {
        NodeKind::Text => return Eligibility::Text,
        NodeKind::Other(_) => return Eligibility::Unsupported,
        NodeKind::Frame { .. } | NodeKind::RoundedRectangle { .. } | NodeKind::Vector => {}
    }

    if node.fills.is_empty() && node.strokes.is_empty() {
        return Eligibility::Unpainted;
    }

    Eligibility::Eligible
}

/// Builds the vector document for a single node, ignoring its children and
/// its visibility.
///
/// Returns `None` when the node is ineligible or when neither the fill nor the
/// stroke step applied anything.
pub fn render_node(node: &Node) -> Option<VectorDocument> {
    let verdict = eligibility(node);
    if verdict != Eligibility::Eligible {
        debug!("Node {} not rendered: {:?}", node.id, verdict);
        return None;
    }

    let (mut canvas, mut shape) = build_shape(&node.bounds);
    let filled = apply_fill(&mut shape, &node.fills);
    let stroked = match apply_stroke(&mut shape, canvas, &node.strokes, node.stroke_weight) {
        Some(grown) => {
            canvas = grown;
            true
        }
        None => false,
    };

    if let Some(radius) = node.kind.corner_radius() {
        apply_corner_radius(&mut shape, radius);
    }

    if filled || stroked {
        Some(VectorDocument::new(canvas, shape))
    } else {
        debug!("Node {} not rendered: no solid fill or stroke", node.id);
        None
    }
}

/// Assets and manifest produced by a single traversal.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub assets: Vec<SvgAsset>,
    /// Mirrors the input roots; each entry carries the path of its own asset
    pub manifest: Vec<ManifestNode>,
}

/// Extracts one vector document per renderable node under `roots`.
pub fn extract<N>(roots: &[Node], naming: &N) -> Vec<SvgAsset>
where
    N: AssetNaming + ?Sized,
{
    extract_with_manifest(roots, naming).assets
}

/// Like [`extract`], also describing every visited node for the manifest.
pub fn extract_with_manifest<N>(roots: &[Node], naming: &N) -> Extraction
where
    N: AssetNaming + ?Sized,
{
    let mut assets = Vec::new();
    let manifest = roots
        .iter()
        .map(|root| visit(root, naming, &mut assets))
        .collect();
    debug!("Extracted {} vector assets", assets.len());
    Extraction { assets, manifest }
}

fn visit<N>(node: &Node, naming: &N, assets: &mut Vec<SvgAsset>) -> ManifestNode
where
    N: AssetNaming + ?Sized,
{
    let children = node
        .children
        .iter()
        .map(|child| visit(child, naming, assets))
        .collect();

    let asset = if node.visible {
        render_node(node).map(|document| {
            let path = naming.asset_path_of(node);
            assets.push(SvgAsset {
                node_id: node.id.clone(),
                document,
                path: path.clone(),
            });
            path
        })
    } else {
        debug!("Node {} hidden; skipping self", node.id);
        None
    };

    ManifestNode::describe(node, asset, children)
}
