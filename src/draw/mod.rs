//! Output primitives for extracted vector assets.
//!
//! This module defines the types every pipeline writes into:
//! - [`Color`]: RGBA color as stored by the design tool, plus its 8-bit form
//! - [`VectorDocument`]: a canvas owning exactly one [`Rectangle`]
//! - SVG encoding of documents for the packaging step

pub mod color;
pub mod document;
pub mod svg;

pub use color::{Color, Rgba8};
pub use document::{CornerRadius, Rectangle, Size, StrokeStyle, VectorDocument};
pub use svg::encode_svg;
