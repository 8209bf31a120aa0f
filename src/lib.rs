//! Library exports for figpack.
//!
//! Converts design-tool node trees (and capability-tagged element lists) into
//! standalone SVG documents and packages them, together with a manifest and
//! any raster assets, into a single archive.

pub mod capability;
pub mod config;
pub mod draw;
pub mod package;
pub mod render;
pub mod tree;
pub mod util;

pub use config::Config;
