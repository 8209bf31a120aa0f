//! Capability pipeline: renders painted elements and reconciles the element
//! list with what was rendered.
//!
//! Every input element yields exactly one [`RenderResult`], in input order.

use super::element::{Element, ImageRef};
use crate::draw::VectorDocument;
use crate::render::{apply_corner_radius, build_shape, fill_with, stroke_with};
use crate::tree::{DirectoryNaming, SvgAsset};
use log::debug;

/// Outcome for one element. Exactly one of the two, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderResult {
    /// The element was drawn; `element` now references the rendered image.
    Rendered {
        element: Element,
        document: VectorDocument,
    },
    /// Nothing was drawn. The element is passed through, possibly with its
    /// paint facet stripped.
    Skipped(Element),
}

impl RenderResult {
    /// The (possibly updated) element.
    pub fn element(&self) -> &Element {
        match self {
            RenderResult::Rendered { element, .. } | RenderResult::Skipped(element) => element,
        }
    }

    pub fn document(&self) -> Option<&VectorDocument> {
        match self {
            RenderResult::Rendered { document, .. } => Some(document),
            RenderResult::Skipped(_) => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderResult::Rendered { .. })
    }
}

/// Runs the capability pipeline over `elements`.
pub fn render_elements(elements: &[Element]) -> Vec<RenderResult> {
    let results: Vec<RenderResult> = elements.iter().map(render_element).collect();
    debug!(
        "Rendered {} of {} elements",
        results.iter().filter(|r| r.is_rendered()).count(),
        results.len()
    );
    results
}

/// Renders a single element.
///
/// - No paint facet: skipped, element unchanged.
/// - No bounding box, or both fill and stroke blank: skipped, paint removed.
/// - Otherwise rendered, with an image facet named `rendered_<id>` attached.
///
/// Corner rounding uses the left-bottom radius for every corner.
pub fn render_element(element: &Element) -> RenderResult {
    let Some(paint) = element.capabilities.paint else {
        debug!("Element {} has no paint; passing through", element.id);
        return RenderResult::Skipped(element.clone());
    };

    let bounds = match element.capabilities.bounding_box {
        Some(bounds) if !paint.is_blank() => bounds,
        _ => {
            debug!("Element {} cannot be drawn; stripping paint", element.id);
            return RenderResult::Skipped(element.without_paint());
        }
    };

    let (mut canvas, mut shape) = build_shape(&bounds);
    fill_with(&mut shape, paint.fill.color());
    if let Some(grown) = stroke_with(&mut shape, canvas, paint.stroke.color(), paint.stroke.weight)
    {
        canvas = grown;
    }

    if let Some(rounded) = element.capabilities.rounded_rectangle {
        apply_corner_radius(&mut shape, rounded.left_bottom);
    }

    RenderResult::Rendered {
        element: element.with_image(ImageRef::new(element.rendered_image_id())),
        document: VectorDocument::new(canvas, shape),
    }
}

/// The reconciled element list, in input order.
pub fn updated_elements(results: &[RenderResult]) -> Vec<Element> {
    results.iter().map(|result| result.element().clone()).collect()
}

/// Vector assets for every rendered element, named after the image each
/// element now references.
pub fn rendered_assets(results: &[RenderResult], naming: &DirectoryNaming) -> Vec<SvgAsset> {
    results
        .iter()
        .filter_map(|result| match result {
            RenderResult::Rendered { element, document } => Some(SvgAsset {
                node_id: element.id.to_string(),
                document: document.clone(),
                path: naming.path_for_stem(&element.rendered_image_id()),
            }),
            RenderResult::Skipped(_) => None,
        })
        .collect()
}
