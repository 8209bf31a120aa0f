//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use zip::CompressionMethod;

/// Compression applied to package archive entries.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionSetting {
    /// Store entries without compressing them
    None,
    /// Fastest compression
    Fast,
    /// Balanced speed and size
    #[default]
    Default,
    /// Smallest output
    Best,
}

impl CompressionSetting {
    /// Zip method for each entry: stored when compression is off.
    pub fn method(self) -> CompressionMethod {
        match self {
            CompressionSetting::None => CompressionMethod::Stored,
            _ => CompressionMethod::Deflated,
        }
    }

    /// Deflate level, or `None` for the library default.
    pub fn level(self) -> Option<i64> {
        match self {
            CompressionSetting::None | CompressionSetting::Default => None,
            CompressionSetting::Fast => Some(1),
            CompressionSetting::Best => Some(9),
        }
    }
}
