//! Design-tree node definitions and design-file loading.

use crate::draw::Color;
use crate::util::Rect;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Kind of a design node, with the attributes only some kinds carry.
///
/// The eligibility rules and the shape builder switch on this tag directly.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Frames and frame-like containers (groups, components, instances)
    Frame { corner_radius: f64 },
    /// Rectangle primitive with optional rounding
    RoundedRectangle { corner_radius: f64 },
    /// Vector primitives (paths, ellipses, lines, stars, polygons, booleans)
    Vector,
    /// Text layer; never rendered as a shape
    Text,
    /// Any other node type (documents, canvases, slices, ...)
    Other(String),
}

impl NodeKind {
    /// Maps a design-tool type tag to a kind.
    pub fn from_type_tag(tag: &str, corner_radius: f64) -> Self {
        match tag {
            "FRAME" | "GROUP" | "COMPONENT" | "COMPONENT_SET" | "INSTANCE" => {
                NodeKind::Frame { corner_radius }
            }
            "RECTANGLE" => NodeKind::RoundedRectangle { corner_radius },
            "TEXT" => NodeKind::Text,
            "VECTOR" | "ELLIPSE" | "LINE" | "STAR" | "REGULAR_POLYGON" | "BOOLEAN_OPERATION" => {
                NodeKind::Vector
            }
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Corner radius for kinds that carry one.
    pub fn corner_radius(&self) -> Option<f64> {
        match self {
            NodeKind::Frame { corner_radius } | NodeKind::RoundedRectangle { corner_radius } => {
                Some(*corner_radius)
            }
            _ => None,
        }
    }

    /// Short lowercase label used in the manifest.
    pub fn label(&self) -> &str {
        match self {
            NodeKind::Frame { .. } => "frame",
            NodeKind::RoundedRectangle { .. } => "rounded-rectangle",
            NodeKind::Vector => "vector",
            NodeKind::Text => "text",
            NodeKind::Other(tag) => tag,
        }
    }
}

/// Paint type tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaintKind {
    Solid,
    Image,
    /// Gradients and anything unrecognised
    Other(String),
}

impl From<String> for PaintKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "SOLID" => PaintKind::Solid,
            "IMAGE" => PaintKind::Image,
            _ => PaintKind::Other(tag),
        }
    }
}

impl From<PaintKind> for String {
    fn from(kind: PaintKind) -> Self {
        match kind {
            PaintKind::Solid => "SOLID".to_string(),
            PaintKind::Image => "IMAGE".to_string(),
            PaintKind::Other(tag) => tag,
        }
    }
}

/// A fill or stroke entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Paint {
    pub fn new(kind: PaintKind, color: Option<Color>) -> Self {
        Self { kind, color }
    }

    pub fn solid(color: Color) -> Self {
        Self::new(PaintKind::Solid, Some(color))
    }

    /// The color to paint with, if this paint is a plain solid color.
    ///
    /// Image paints, gradients and unknown paint types yield `None`.
    pub fn solid_color(&self) -> Option<Color> {
        match self.kind {
            PaintKind::Solid => self.color,
            PaintKind::Image | PaintKind::Other(_) => None,
        }
    }
}

/// A visual node in the design tree. Each node owns its children; child order
/// is z-order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub visible: bool,
    /// Absolute bounding box in pixels
    pub bounds: Rect,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a visible node with no paints and no children.
    pub fn new(id: impl Into<String>, kind: NodeKind, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            visible: true,
            bounds,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = weight;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// On-disk node layout as exported by the design tool.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default = "visible_by_default")]
    visible: bool,
    #[serde(default)]
    absolute_bounding_box: Option<Rect>,
    #[serde(default)]
    fills: Vec<Paint>,
    #[serde(default)]
    strokes: Vec<Paint>,
    #[serde(default)]
    stroke_weight: f64,
    #[serde(default)]
    corner_radius: f64,
    #[serde(default)]
    children: Vec<Node>,
}

fn visible_by_default() -> bool {
    true
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        Self {
            kind: NodeKind::from_type_tag(&raw.node_type, raw.corner_radius),
            id: raw.id,
            name: raw.name,
            visible: raw.visible,
            bounds: raw.absolute_bounding_box.unwrap_or_default(),
            fills: raw.fills,
            strokes: raw.strokes,
            stroke_weight: raw.stroke_weight,
            children: raw.children,
        }
    }
}

/// Parses design-file JSON into extraction roots.
///
/// A full file (`{"document": ...}`) yields the document's children (its
/// canvases); a bare array or a single node is used as-is. The top-level shape
/// picks the layout, so a malformed node anywhere below it is an error.
pub fn parse_design(json: &str) -> Result<Vec<Node>> {
    let value: Value = serde_json::from_str(json).context("failed to parse design json")?;
    match value {
        Value::Object(mut object) => match object.remove("document") {
            Some(document) => {
                let document: Node =
                    serde_json::from_value(document).context("invalid design document")?;
                Ok(document.children)
            }
            None => {
                let node: Node =
                    serde_json::from_value(Value::Object(object)).context("invalid design node")?;
                Ok(vec![node])
            }
        },
        Value::Array(_) => serde_json::from_value(value).context("invalid design node list"),
        _ => bail!("design json must be an object or an array of nodes"),
    }
}

/// Reads and parses a design file from disk.
pub fn load_design(path: &Path) -> Result<Vec<Node>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read design file {}", path.display()))?;
    parse_design(&json).with_context(|| format!("invalid design file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags_map_to_kinds() {
        assert_eq!(
            NodeKind::from_type_tag("GROUP", 3.0),
            NodeKind::Frame { corner_radius: 3.0 }
        );
        assert_eq!(
            NodeKind::from_type_tag("RECTANGLE", 2.0),
            NodeKind::RoundedRectangle { corner_radius: 2.0 }
        );
        assert_eq!(NodeKind::from_type_tag("ELLIPSE", 0.0), NodeKind::Vector);
        assert_eq!(NodeKind::from_type_tag("TEXT", 0.0), NodeKind::Text);
        assert_eq!(
            NodeKind::from_type_tag("SLICE", 0.0),
            NodeKind::Other("SLICE".into())
        );
    }

    #[test]
    fn only_frames_and_rectangles_carry_radius() {
        assert_eq!(NodeKind::Frame { corner_radius: 4.0 }.corner_radius(), Some(4.0));
        assert_eq!(NodeKind::Vector.corner_radius(), None);
        assert_eq!(NodeKind::Text.corner_radius(), None);
    }

    #[test]
    fn parses_full_design_file() {
        let json = r#"{
            "document": {
                "id": "0:0",
                "type": "DOCUMENT",
                "children": [{
                    "id": "0:1",
                    "type": "CANVAS",
                    "children": [{
                        "id": "1:2",
                        "name": "Card",
                        "type": "FRAME",
                        "absoluteBoundingBox": {"x": 10, "y": 20, "width": 100, "height": 50},
                        "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}],
                        "strokes": [],
                        "strokeWeight": 1,
                        "cornerRadius": 8
                    }]
                }]
            }
        }"#;

        let roots = parse_design(json).expect("parse");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].kind, NodeKind::Other("CANVAS".into()));

        let card = &roots[0].children[0];
        assert_eq!(card.id, "1:2");
        assert_eq!(card.name, "Card");
        assert!(card.visible);
        assert_eq!(card.kind, NodeKind::Frame { corner_radius: 8.0 });
        assert_eq!(card.bounds, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(card.fills[0].kind, PaintKind::Solid);
        assert_eq!(card.stroke_weight, 1.0);
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        let roots = parse_design(r#"[{"id": "9", "type": "VECTOR", "visible": false}]"#)
            .expect("parse");
        let node = &roots[0];
        assert!(!node.visible);
        assert_eq!(node.bounds, Rect::default());
        assert!(node.fills.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn image_paint_has_no_solid_color() {
        let paint: Paint = serde_json::from_str(r#"{"type": "IMAGE", "imageRef": "abc"}"#).unwrap();
        assert_eq!(paint.kind, PaintKind::Image);
        assert_eq!(paint.solid_color(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_design("{ not json").is_err());
        assert!(parse_design("42").is_err());
    }

    #[test]
    fn malformed_nested_node_is_an_error() {
        let json = r#"{
            "document": {
                "id": "0:0",
                "type": "DOCUMENT",
                "children": [{
                    "id": "0:1",
                    "type": "CANVAS",
                    "children": [{
                        "id": "1:2",
                        "type": "FRAME",
                        "absoluteBoundingBox": {"x": 0, "y": 0, "width": "100", "height": 50},
                        "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}]
                    }]
                }]
            }
        }"#;

        let err = parse_design(json).unwrap_err();
        assert!(format!("{err:#}").contains("invalid design document"));
    }

    #[test]
    fn malformed_node_in_list_is_an_error() {
        let json = r#"[{"id": "1", "type": "VECTOR", "fills": {"type": "SOLID"}}]"#;
        assert!(parse_design(json).is_err());
    }

    #[test]
    fn bare_node_object_is_a_single_root() {
        let roots = parse_design(r#"{"id": "5", "type": "RECTANGLE", "cornerRadius": 2}"#)
            .expect("parse");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].kind, NodeKind::RoundedRectangle { corner_radius: 2.0 });
    }
}
