//! Companion palette generation
//!
//! Derives analogous, complementary and triadic companions for a base
//! color by rotating its hue in HSL space while holding saturation and
//! lightness fixed.

use crate::color::conversion::{hsl_to_rgb, rgb_to_hsl};
use crate::color::types::{Color, HslColor};

/// Hue offsets as fractions of a full turn, in output order:
/// analogous +30°, analogous −30°, complementary +180°, triadic +120°,
/// triadic +240°
const HUE_ROTATIONS: [f32; 5] = [
    1.0 / 12.0,
    -1.0 / 12.0,
    1.0 / 2.0,
    1.0 / 3.0,
    2.0 / 3.0,
];

/// Generates the fixed five-color companion palette for a base color
pub struct PaletteGenerator;

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Derive the ordered companion palette for `base`
    ///
    /// Always returns exactly 5 colors. A fully desaturated base has no
    /// visible hue to rotate, so all five outputs equal the input; that
    /// degenerate case is accepted rather than special-cased.
    pub fn generate(&self, base: Color) -> Vec<Color> {
        let hsl = rgb_to_hsl(base);

        HUE_ROTATIONS
            .iter()
            .map(|fraction| {
                let rotated = HslColor {
                    hue: (hsl.hue + fraction * 360.0).rem_euclid(360.0),
                    ..hsl
                };
                hsl_to_rgb(rotated)
            })
            .collect()
    }
}
