//! Color space conversion and distance primitives
//!
//! Provides the RGB ↔ HSL conversions used for palette rotation and the
//! Euclidean RGB distance used for nearest-name classification. The
//! conversions go through the `palette` crate; only the boundary types
//! (8-bit channels, percentage saturation/lightness) are ours.

use palette::{FromColor, Hsl, Srgb};

use crate::color::types::{Color, HslColor};

/// Convert an 8-bit RGB color to HSL
///
/// Hue is reported in [0, 360) degrees, saturation and lightness as
/// percentages in [0, 100]. Achromatic input (r = g = b) yields hue 0 and
/// saturation 0.
pub fn rgb_to_hsl(color: Color) -> HslColor {
    let srgb = Srgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    );
    let hsl = Hsl::from_color(srgb);

    HslColor {
        hue: hsl.hue.into_positive_degrees(),
        saturation: hsl.saturation * 100.0,
        lightness: hsl.lightness * 100.0,
    }
}

/// Convert an HSL color back to 8-bit RGB
///
/// Inverse of [`rgb_to_hsl`]; the round trip differs by at most 1 per
/// channel from integer rounding.
pub fn hsl_to_rgb(hsl: HslColor) -> Color {
    let converted = Hsl::new(
        hsl.hue,
        hsl.saturation / 100.0,
        hsl.lightness / 100.0,
    );
    let srgb = Srgb::from_color(converted);

    Color::new(
        channel_to_u8(srgb.red),
        channel_to_u8(srgb.green),
        channel_to_u8(srgb.blue),
    )
}

/// Euclidean distance between two colors in RGB space
///
/// `sqrt(Δr² + Δg² + Δb²)`, unnormalized; larger means less similar.
/// Zero iff the colors are channel-wise identical, and symmetric in its
/// arguments.
pub fn distance(a: Color, b: Color) -> f32 {
    let dr = a.r as f32 - b.r as f32;
    let dg = a.g as f32 - b.g as f32;
    let db = a.b as f32 - b.b as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Round a [0, 1] channel to the nearest 8-bit value, clamped
fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
