//! Geometry and naming helpers shared by the extraction pipelines.
//!
//! This module provides:
//! - [`Rect`], the absolute bounding box carried by nodes and elements
//! - Identifier sanitising for archive entry names
//! - Tilde expansion for user-supplied paths

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Geometry
// ============================================================================

/// Axis-aligned rectangle in absolute pixel units.
///
/// Width and height are non-negative by construction of the source geometry;
/// they are not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

// ============================================================================
// Naming
// ============================================================================

/// Replaces every character that is not ASCII alphanumeric with `_`.
///
/// Design-tool identifiers such as `12:34` are not safe archive entry names,
/// so asset paths are built from the sanitised form. An empty identifier maps
/// to `"default"`.
pub fn sanitize_identifier(raw: &str) -> String {
    if raw.is_empty() {
        return "default".to_string();
    }

    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_separators() {
        assert_eq!(sanitize_identifier("12:34"), "12_34");
        assert_eq!(sanitize_identifier("I5;7:2"), "I5_7_2");
        assert_eq!(sanitize_identifier(""), "default");
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        let expanded = expand_tilde("~/designs");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }
}
