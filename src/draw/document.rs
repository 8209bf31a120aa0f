//! Vector document model: one canvas owning a single rectangle.

use super::color::Rgba8;
use serde::Serialize;

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grows both dimensions by `amount`. Negative amounts are ignored so a
    /// canvas never shrinks.
    pub fn grown_by(self, amount: f64) -> Self {
        let amount = amount.max(0.0);
        Self {
            width: self.width + amount,
            height: self.height + amount,
        }
    }
}

/// Stroke paint and width for a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f64,
}

/// Isotropic corner rounding. Horizontal and vertical radii are stored
/// independently but are always set to the same value by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CornerRadius {
    pub rx: f64,
    pub ry: f64,
}

impl CornerRadius {
    pub fn uniform(radius: f64) -> Self {
        Self {
            rx: radius,
            ry: radius,
        }
    }
}

/// The rectangle placed inside a [`VectorDocument`].
///
/// Position is local to the document canvas; the node's absolute position is
/// never carried over.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Rgba8>,
    pub stroke: Option<StrokeStyle>,
    pub corner_radius: Option<CornerRadius>,
}

impl Rectangle {
    /// Rectangle at the local origin with no paint applied.
    pub fn at_origin(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
            fill: None,
            stroke: None,
            corner_radius: None,
        }
    }

    /// True once a fill or a stroke has been written.
    pub fn is_painted(&self) -> bool {
        self.fill.is_some() || self.stroke.is_some()
    }
}

/// Standalone vector image: a root canvas owning exactly one rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorDocument {
    canvas: Size,
    shape: Rectangle,
}

impl VectorDocument {
    pub fn new(canvas: Size, shape: Rectangle) -> Self {
        Self { canvas, shape }
    }

    pub fn width(&self) -> f64 {
        self.canvas.width
    }

    pub fn height(&self) -> f64 {
        self.canvas.height
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The document's sole shape.
    pub fn shape(&self) -> &Rectangle {
        &self.shape
    }

    /// Every shape owned by the document, in paint order. Always one element.
    pub fn shapes(&self) -> &[Rectangle] {
        std::slice::from_ref(&self.shape)
    }
}
