//! Pipeline over a flat list of capability-tagged elements.

pub mod element;
pub mod renderer;

pub use element::{
    Capabilities, Element, ElementId, Fill, ImageRef, Paint, RoundedRectangle, Stroke,
    load_elements, parse_elements,
};
pub use renderer::{RenderResult, render_element, render_elements, rendered_assets, updated_elements};
