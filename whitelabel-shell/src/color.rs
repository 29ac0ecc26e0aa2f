//! Color utilities for perceptually uniform shade derivation.
//!
//! Brand tones are adjusted in HSLuv space, where equal lightness steps
//! produce equal perceived differences across the entire gamut.

use iced::Color;
use whitelabel_model::parse_hex_color;

/// A color in HSLuv color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsluvColor {
    /// Hue in degrees (0-360)
    pub hue: f32,
    /// Saturation as percentage (0-100)
    pub saturation: f32,
    /// Lightness as percentage (0-100)
    pub lightness: f32,
}

impl HsluvColor {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Convert to sRGB (using the hsluv crate).
    pub fn to_srgb(&self) -> Color {
        let (r, g, b) = hsluv::hsluv_to_rgb(
            self.hue as f64,
            self.saturation as f64,
            self.lightness as f64,
        );
        // Clamp to handle floating point precision issues from the conversion
        Color::from_rgb(
            (r as f32).clamp(0.0, 1.0),
            (g as f32).clamp(0.0, 1.0),
            (b as f32).clamp(0.0, 1.0),
        )
    }

    /// Create from an sRGB color.
    pub fn from_srgb(color: Color) -> Self {
        let (h, s, l) = hsluv::rgb_to_hsluv(color.r as f64, color.g as f64, color.b as f64);
        Self {
            hue: h as f32,
            saturation: s as f32,
            lightness: l as f32,
        }
    }

    /// Create a new color with adjusted lightness.
    pub fn with_lightness(&self, lightness: f32) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

/// Parse a `#RRGGBB` branding color into an iced color.
pub fn from_hex(value: &str) -> Option<Color> {
    let (r, g, b) = parse_hex_color(value)?;
    Some(Color::from_rgb8(r, g, b))
}

/// Shift a color's HSLuv lightness by `delta` points, clamped to [0, 100].
pub fn shift_lightness(color: Color, delta: f32) -> Color {
    let hsluv = HsluvColor::from_srgb(color);
    hsluv.with_lightness(hsluv.lightness + delta).to_srgb()
}

/// The HSLuv lightness of a color, in [0, 100].
pub fn lightness(color: Color) -> f32 {
    HsluvColor::from_srgb(color).lightness
}
