//! # Wardrobe Vision
//!
//! A Rust crate for extracting garment attributes from photographs and
//! ranking outfit suggestions.
//!
//! This library provides the deterministic analysis pipeline behind a
//! garment catalogue:
//! - Reducing a decoded photo to a dominant color with a readable name
//!   and a generated companion palette
//! - Bucketing the garment into a coarse category from the photo shape
//! - Parsing OCR'd label text into brand/size/material fields
//! - Ranking outfits against stored user preferences and mapping raw
//!   weather observations to suitability tags
//!
//! Everything here is a pure function over caller-supplied data: image
//! decoding, OCR, storage and text generation live in the surrounding
//! application.
//!
//! ## Example
//!
//! ```rust
//! use wardrobe_vision::{DecodedImage, GarmentAnalyzer};
//!
//! let analyzer = GarmentAnalyzer::with_reference_table();
//! let image = DecodedImage::from_rgb(2, 2, &[0, 0, 130, 0, 0, 130, 0, 0, 126, 0, 0, 126])?;
//! let attributes = analyzer.analyze(&image, Some("Marque: Saint James, taille: M"))?;
//!
//! assert_eq!(attributes.color_name, "navy");
//! assert_eq!(attributes.label.size.as_deref(), Some("M"));
//! # Ok::<(), wardrobe_vision::AnalysisError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod label;
pub mod recommend;

pub use color::{Color, ColorNamer, DominantColorExtractor, HslColor, PaletteGenerator};
pub use config::{NamedColorEntry, NamedColorTable};
pub use detection::{CategoryClassifier, GarmentCategory};
pub use error::{AnalysisError, Result};
pub use label::{LabelAttributes, LabelTextExtractor};
pub use recommend::{
    Garment, Outfit, OutfitRecommender, RankedOutfit, UserPreference, WeatherCondition,
    WeatherSnapshot, WeatherSuitability, WeatherSuitabilityMapper,
};

use color::dominant::Rgb8;

/// A decoded image as supplied by the upload collaborator
///
/// The caller decodes the file format; this type only carries the pixel
/// grid and validates that the buffer is consistent with the declared
/// dimensions.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl DecodedImage {
    /// Build from pre-chunked pixels
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidDimensions`] if either dimension is
    /// zero or `pixels` does not hold exactly `width * height` entries
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb8>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return Err(AnalysisError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from a flat RGB byte buffer (3 bytes per pixel)
    pub fn from_rgb(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        Self::from_buffer(width, height, data, 3)
    }

    /// Build from a flat RGBA byte buffer (4 bytes per pixel); the alpha
    /// channel is dropped
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        Self::from_buffer(width, height, data, 4)
    }

    fn from_buffer(width: u32, height: u32, data: &[u8], channels: usize) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * channels;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(AnalysisError::InvalidDimensions { width, height });
        }
        let pixels = data
            .chunks_exact(channels)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decoded pixels in row-major order
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }
}

/// Complete attribute bundle for one analyzed garment photo
///
/// Immutable once produced; persisting it is the storage collaborator's
/// job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentImageAttributes {
    /// Inferred coarse category
    pub category: GarmentCategory,
    /// Mean color of the photo
    pub dominant_color: Color,
    /// Readable name of the dominant color
    pub color_name: String,
    /// Companion palette derived from the dominant color (5 entries)
    pub palette: Vec<Color>,
    /// Attributes parsed from label OCR text, when available
    pub label: LabelAttributes,
}

/// Color name and companion palette for a caller-supplied hex color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResolution {
    pub color_name: String,
    pub palette: Vec<Color>,
}

/// Top-level analyzer bundling the pipeline components
///
/// Constructed once with the named color table (the only configuration)
/// and then shared freely: every component is pure and the table is
/// read-only, so concurrent use needs no synchronization.
pub struct GarmentAnalyzer {
    extractor: DominantColorExtractor,
    classifier: CategoryClassifier,
    namer: ColorNamer,
    palette: PaletteGenerator,
    labels: LabelTextExtractor,
}

impl GarmentAnalyzer {
    /// Create an analyzer over the given named color table
    pub fn new(table: NamedColorTable) -> Self {
        Self {
            extractor: DominantColorExtractor::new(),
            classifier: CategoryClassifier::new(),
            namer: ColorNamer::new(table),
            palette: PaletteGenerator::new(),
            labels: LabelTextExtractor::new(),
        }
    }

    /// Create an analyzer over the built-in reference table
    pub fn with_reference_table() -> Self {
        Self::new(NamedColorTable::reference())
    }

    /// Analyze one garment photo, plus its label OCR text when available
    ///
    /// The image is routed through the dominant-color branch (color,
    /// name, palette) and the category branch independently; the OCR text
    /// goes through label extraction; the results merge into one bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has invalid dimensions or no pixels.
    /// Callers should treat that as "skip the auto-detected attributes
    /// for this garment", not as a fatal failure.
    pub fn analyze(
        &self,
        image: &DecodedImage,
        ocr_text: Option<&str>,
    ) -> Result<GarmentImageAttributes> {
        let category = self.classifier.classify(image.width(), image.height())?;
        let dominant_color = self.extractor.extract(image.pixels())?;
        let color_name = self.namer.name(dominant_color).to_string();
        let palette = self.palette.generate(dominant_color);
        let label = ocr_text
            .map(|text| self.labels.extract(text))
            .unwrap_or_default();

        debug!(
            "analyzed {}x{} image: category={}, color={} ({})",
            image.width(),
            image.height(),
            category,
            dominant_color,
            color_name
        );

        Ok(GarmentImageAttributes {
            category,
            dominant_color,
            color_name,
            palette,
            label,
        })
    }

    /// Resolve a `#RRGGBB` string to its name and companion palette
    ///
    /// This is the surface exposed to the application's color pickers;
    /// validation of the hex form happens here, before the naming and
    /// palette components run.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidColorFormat`] for anything that is
    /// not `#` followed by exactly 6 hex digits
    pub fn resolve_color(&self, hex: &str) -> Result<ColorResolution> {
        let color = Color::from_hex(hex)?;
        Ok(ColorResolution {
            color_name: self.namer.name(color).to_string(),
            palette: self.palette.generate(color),
        })
    }
}
