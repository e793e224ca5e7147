//! Label text extraction module
//!
//! This module handles extraction of structured attributes (brand, size,
//! material) from OCR text recognized on garment labels.

pub mod extractor;

pub use extractor::{LabelAttributes, LabelTextExtractor};
