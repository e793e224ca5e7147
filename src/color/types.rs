//! Core color value types
//!
//! `Color` is the 8-bit RGB triple used throughout the pipeline; it
//! serializes as a `"#RRGGBB"` hex string for human-readable formats.
//! `HslColor` is the cylindrical intermediate used for palette rotation.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable 8-bit RGB color
///
/// Channel values are constrained to [0, 255] by construction; values
/// arriving from float math are rounded and clamped before narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL representation: hue in [0, 360), saturation and lightness in [0, 100]
///
/// Used only as an intermediate form for palette rotation; round-trips
/// through [`Color`] within ±1 per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Color {
    /// Create a color from 8-bit channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` hex color string
    ///
    /// The leading `#` is required and exactly 6 hexadecimal digits must
    /// follow, in either case. Anything else fails with
    /// [`AnalysisError::InvalidColorFormat`]; this is the validation that
    /// runs before the naming and palette components.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF0000" or "#ff0000")
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` if the string is not `#` + 6 hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| AnalysisError::invalid_color_format(hex))?;

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AnalysisError::invalid_color_format(hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AnalysisError::invalid_color_format(hex))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as an uppercase `#RRGGBB` hex string
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
