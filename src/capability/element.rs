//! Capability-tagged elements.
//!
//! An element carries at most one facet of each kind, so facets are plain
//! `Option` fields rather than an open property bag. Elements are values:
//! every "update" returns a new element and leaves the original untouched.

use crate::draw::Color;
use crate::util::Rect;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type ElementId = u64;

/// Fill facet channel values. All-zero means blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fill {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Fill {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Color to paint with, `None` when blank.
    pub fn color(&self) -> Option<Color> {
        (!self.is_blank()).then(|| Color::new(self.r, self.g, self.b, self.a))
    }
}

/// Stroke facet channel values and weight. All-zero means blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stroke {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
    pub weight: f64,
}

impl Stroke {
    pub fn new(r: f64, g: f64, b: f64, a: f64, weight: f64) -> Self {
        Self { r, g, b, a, weight }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    pub fn color(&self) -> Option<Color> {
        (!self.is_blank()).then(|| Color::new(self.r, self.g, self.b, self.a))
    }
}

/// Paint facet: one fill and one stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paint {
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Paint {
    pub fn is_blank(&self) -> bool {
        self.fill.is_blank() && self.stroke.is_blank()
    }
}

/// Per-corner radii. Rendering only reads `left_bottom` and applies it to
/// every corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundedRectangle {
    pub left_top: f64,
    pub right_top: f64,
    pub right_bottom: f64,
    pub left_bottom: f64,
}

impl RoundedRectangle {
    pub fn uniform(radius: f64) -> Self {
        Self {
            left_top: radius,
            right_top: radius,
            right_bottom: radius,
            left_bottom: radius,
        }
    }
}

/// Image facet: the element is drawn from an external image asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub asset_id: String,
}

impl ImageRef {
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
        }
    }
}

/// The facets an element may carry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded_rectangle: Option<RoundedRectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl Element {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            capabilities: Capabilities::default(),
        }
    }

    pub fn with_bounding_box(mut self, bounds: Rect) -> Self {
        self.capabilities.bounding_box = Some(bounds);
        self
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.capabilities.paint = Some(paint);
        self
    }

    pub fn with_rounded_rectangle(mut self, rounded: RoundedRectangle) -> Self {
        self.capabilities.rounded_rectangle = Some(rounded);
        self
    }

    /// Copy of this element carrying `image` as its image facet.
    pub fn with_image(&self, image: ImageRef) -> Self {
        let mut updated = self.clone();
        updated.capabilities.image = Some(image);
        updated
    }

    /// Copy of this element with the paint facet removed.
    pub fn without_paint(&self) -> Self {
        let mut updated = self.clone();
        updated.capabilities.paint = None;
        updated
    }

    /// Identifier of the image this element is rendered into.
    pub fn rendered_image_id(&self) -> String {
        format!("rendered_{}", self.id)
    }
}

/// Parses a JSON array of elements.
pub fn parse_elements(json: &str) -> Result<Vec<Element>> {
    serde_json::from_str(json).context("failed to parse element list json")
}

/// Reads and parses an element list from disk.
pub fn load_elements(path: &Path) -> Result<Vec<Element>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read element list {}", path.display()))?;
    parse_elements(&json).with_context(|| format!("invalid element list {}", path.display()))
}
