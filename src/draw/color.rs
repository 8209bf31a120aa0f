//! RGBA color types and the 8-bit channel conversion used for output.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum), matching
/// how design tools store paint colors.
///
/// # Examples
///
/// ```
/// use figpack::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to 8 bits per channel.
    ///
    /// Each channel is clamped to 0.0-1.0 and mapped with `round(c * 255)`,
    /// independently for R, G, B and A.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
            a: channel_to_u8(self.a),
        }
    }
}

fn opaque() -> f64 {
    1.0
}

fn channel_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A color with 8 bits per channel, as written into vector documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` notation; alpha is carried separately as an opacity.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as an opacity in 0.0-1.0.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_channels_map_to_255() {
        let rgba = Color::new(1.0, 0.0, 0.0, 1.0).to_rgba8();
        assert_eq!(rgba, Rgba8::new(255, 0, 0, 255));
    }

    #[test]
    fn channels_are_rounded_not_truncated() {
        // 0.5 * 255 = 127.5, 0.2 * 255 = 51.0, 0.999 * 255 = 254.745
        let rgba = Color::new(0.5, 0.2, 0.999, 0.1).to_rgba8();
        assert_eq!(rgba, Rgba8::new(128, 51, 255, 26));
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let rgba = Color::new(-0.5, 1.7, f64::NAN, 1.0).to_rgba8();
        assert_eq!(rgba, Rgba8::new(0, 255, 0, 255));
    }

    #[test]
    fn hex_is_lowercase_rgb() {
        assert_eq!(Rgba8::new(255, 16, 0, 128).hex(), "#ff1000");
    }

    #[test]
    fn missing_alpha_defaults_to_opaque() {
        let color: Color = serde_json::from_str(r#"{"r":0.0,"g":1.0,"b":0.0}"#).unwrap();
        assert_eq!(color.a, 1.0);
    }
}
