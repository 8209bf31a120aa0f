//! Shape Builder: sizes a fresh canvas and rectangle from a bounding box.

use crate::draw::{Rectangle, Size};
use crate::util::Rect;

/// Builds the canvas size and the rectangle for a node's bounding box.
///
/// The canvas takes the bounding box's width and height; its absolute
/// position is discarded. The rectangle sits at the local origin with the
/// same size. No unit conversion or DPI scaling happens here.
///
/// The caller assembles the final [`crate::draw::VectorDocument`] once
/// styling has settled the canvas size.
pub fn build_shape(bounds: &Rect) -> (Size, Rectangle) {
    let canvas = Size::new(bounds.width, bounds.height);
    (canvas, Rectangle::at_origin(canvas))
}
