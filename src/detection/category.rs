//! Garment category detection from image shape
//!
//! Buckets a garment photo into a coarse category from its aspect ratio
//! alone. This is deliberately not a vision model: product shots of shoes
//! tend to be wide, trousers tall, tops roughly upright, and that is
//! precise enough for first-pass tagging the user can correct. If real
//! accuracy is ever needed, swap this detector behind the same
//! input/output contract for a model; do not grow the heuristic.

use serde::{Deserialize, Serialize};

use crate::constants::category::{BOTTOMS_MAX_RATIO, SHOES_MIN_RATIO, TOPS_MAX_RATIO};
use crate::error::{AnalysisError, Result};

/// Coarse garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    Tops,
    Bottoms,
    Shoes,
    /// Category was never detected and not yet filled in by the user
    Unknown,
}

impl GarmentCategory {
    /// Lowercase name as stored by the data backend
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentCategory::Tops => "tops",
            GarmentCategory::Bottoms => "bottoms",
            GarmentCategory::Shoes => "shoes",
            GarmentCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies garment photos by aspect ratio
pub struct CategoryClassifier;

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify an image by its dimensions
    ///
    /// Thresholds are evaluated in order, first match wins:
    /// ratio > 1.5 → shoes, ratio < 0.7 → bottoms, ratio ≤ 0.9 → tops,
    /// anything squarer defaults to tops as well.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidDimensions`] if either dimension
    /// is zero
    pub fn classify(&self, width: u32, height: u32) -> Result<GarmentCategory> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions { width, height });
        }

        let ratio = width as f32 / height as f32;

        if ratio > SHOES_MIN_RATIO {
            return Ok(GarmentCategory::Shoes);
        }
        if ratio < BOTTOMS_MAX_RATIO {
            return Ok(GarmentCategory::Bottoms);
        }
        if ratio <= TOPS_MAX_RATIO {
            return Ok(GarmentCategory::Tops);
        }
        // Near-square and moderately wide shots land in the default bucket
        Ok(GarmentCategory::Tops)
    }
}
