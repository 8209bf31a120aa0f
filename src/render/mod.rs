//! Shape building and styling shared by the tree and capability pipelines.

pub mod shape;
pub mod style;

pub use shape::build_shape;
pub use style::{apply_corner_radius, apply_fill, apply_stroke, fill_with, stroke_with};
