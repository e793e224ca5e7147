//! Label attribute extraction from OCR text
//!
//! Parses the free text recognized on a garment's care or brand label
//! into structured brand/size/material fields. This is ordered pattern
//! matching, not NLP: each field has a priority list of patterns tried in
//! turn, and the first non-empty capture wins. No match leaves the field
//! absent, which is a valid result, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::label::{NUMERIC_SIZE_MAX, NUMERIC_SIZE_MIN};

/// Structured attributes recognized on a garment label
///
/// Every field is optional; OCR noise and unlabelled garments routinely
/// produce partial or empty results.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LabelAttributes {
    /// Manufacturer or designer name
    pub brand: Option<String>,
    /// Garment size, normalized to uppercase (e.g. "M", "42")
    pub size: Option<String>,
    /// Fabric name as printed (e.g. "Cotton", "laine")
    pub material: Option<String>,
}

/// Brand patterns in priority order: explicit label, "by <maker>",
/// "<maker> collection". Matching is case-insensitive over the original
/// text so captures keep the label's own casing.
static BRAND_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:brand|marque)\s*:\s*([^,;\r\n]+)",
        r"(?i)\bby\s+([^,;\r\n]+)",
        r"(?i)\b([\w&'.-]+)\s+collection\b",
    ])
});

/// Size patterns in priority order: explicit label, standalone letter
/// size, bare European numeric size (validated against the 34-52 range
/// separately).
static SIZE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:size|taille)\s*:\s*([0-9]{1,3}|[a-zA-Z]{1,4})",
        r"(?i)\b(xxxl|xxl|xl|xs|s|m|l)\b",
        r"\b([0-9]{2})\b",
    ])
});

/// Material patterns in priority order: explicit label, then a fixed
/// bilingual fabric vocabulary.
static MATERIAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:material|mati[eè]re|composition)\s*:\s*([^,;\r\n]+)",
        r"(?i)\b(cotton|coton|polyester|wool|laine|silk|soie|linen|lin|viscose|elastane|[ée]lasthanne)\b",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("label pattern is a fixed, valid expression"))
        .collect()
}

/// Extracts structured label attributes from OCR text
pub struct LabelTextExtractor;

impl Default for LabelTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelTextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` into brand/size/material fields
    ///
    /// Absent fields mean no pattern matched; the caller proceeds with
    /// whatever was found.
    pub fn extract(&self, text: &str) -> LabelAttributes {
        LabelAttributes {
            brand: first_capture(&BRAND_PATTERNS, text),
            size: self.extract_size(text),
            material: first_capture(&MATERIAL_PATTERNS, text),
        }
    }

    fn extract_size(&self, text: &str) -> Option<String> {
        for (index, pattern) in SIZE_PATTERNS.iter().enumerate() {
            for captures in pattern.captures_iter(text) {
                let token = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                if token.is_empty() {
                    continue;
                }
                // The bare-number fallback only accepts European sizes
                if index == 2 && !is_numeric_size(token) {
                    continue;
                }
                return Some(token.to_uppercase());
            }
        }
        None
    }
}

/// First non-empty trimmed capture across the ordered pattern list
fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(text) {
            let value = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn is_numeric_size(token: &str) -> bool {
    token
        .parse::<u32>()
        .is_ok_and(|n| (NUMERIC_SIZE_MIN..=NUMERIC_SIZE_MAX).contains(&n))
}
