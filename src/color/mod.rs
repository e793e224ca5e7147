//! Color analysis and conversion module
//!
//! This module handles color value types, RGB ↔ HSL conversion, dominant
//! color extraction, nearest-name classification, and companion palette
//! generation.

pub mod conversion;
pub mod dominant;
pub mod naming;
pub mod palette;
pub mod types;

pub use dominant::DominantColorExtractor;
pub use naming::ColorNamer;
pub use palette::PaletteGenerator;
pub use types::{Color, HslColor};
