//! Dominant color extraction from decoded pixel data
//!
//! Reduces an image's pixel buffer to one representative RGB color by
//! averaging every channel. This is a plain mean, not clustering or a mode
//! computation: it is cheap, deterministic, and sufficient for approximate
//! garment-color tagging. Large uniform backgrounds (white product shots)
//! bias the result toward the background; that is accepted behavior. If
//! accuracy ever matters, replace this extractor behind the same contract
//! with a real model rather than complicating the heuristic.

use log::debug;

use crate::color::types::Color;
use crate::error::{AnalysisError, Result};

/// A single decoded pixel, red/green/blue channels
pub type Rgb8 = [u8; 3];

/// Extracts one representative color from decoded pixels
pub struct DominantColorExtractor;

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Compute the per-channel mean color across every pixel
    ///
    /// # Arguments
    ///
    /// * `pixels` - Decoded pixel data; alpha, if the source had one, must
    ///   already be stripped (see [`crate::DecodedImage::from_rgba`])
    ///
    /// # Returns
    ///
    /// The mean color, each channel rounded to the nearest integer and
    /// clamped to [0, 255]
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyImage`] if `pixels` is empty
    pub fn extract(&self, pixels: &[Rgb8]) -> Result<Color> {
        if pixels.is_empty() {
            return Err(AnalysisError::EmptyImage);
        }

        let mut sums = [0u64; 3];
        for pixel in pixels {
            sums[0] += pixel[0] as u64;
            sums[1] += pixel[1] as u64;
            sums[2] += pixel[2] as u64;
        }

        let count = pixels.len() as f64;
        let mean = |sum: u64| ((sum as f64 / count).round() as i64).clamp(0, 255) as u8;

        let color = Color::new(mean(sums[0]), mean(sums[1]), mean(sums[2]));
        debug!("dominant color {} over {} pixels", color, pixels.len());
        Ok(color)
    }
}
