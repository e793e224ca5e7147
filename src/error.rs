//! Error types for the wardrobe_vision library

use thiserror::Error;

/// Result type alias for wardrobe_vision operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for garment attribute analysis
///
/// Every operation in this crate is a deterministic pure computation, so
/// there is no retry logic anywhere: retrying reproduces the identical
/// failure. Callers are expected to treat an analysis error as "skip this
/// garment's auto-detected attributes", never as a fatal failure.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Dominant color extraction was given zero pixels
    #[error("Empty image: no pixels to analyze")]
    EmptyImage,

    /// Category classification was given a non-positive dimension,
    /// or a pixel buffer inconsistent with its declared dimensions
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A color string did not match the `#RRGGBB` form
    #[error("Invalid color format: {input:?} (expected \"#RRGGBB\")")]
    InvalidColorFormat { input: String },

    /// Named color table is unusable (e.g. empty after loading)
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// I/O error while loading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while loading or saving configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create an invalid color format error
    pub fn invalid_color_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Recoverable errors mean one garment's automatic attributes are
    /// unavailable; the surrounding workflow continues and the user fills
    /// the fields in manually. Configuration and I/O errors are not
    /// recoverable per-garment since they affect every analysis.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyImage
                | AnalysisError::InvalidDimensions { .. }
                | AnalysisError::InvalidColorFormat { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::EmptyImage => {
                "Could not read the photo content. Please try another photo.".to_string()
            }
            AnalysisError::InvalidDimensions { .. } => {
                "The photo dimensions are invalid. Please try another photo.".to_string()
            }
            AnalysisError::InvalidColorFormat { .. } => {
                "The color value is not recognized. Please pick a color manually.".to_string()
            }
            _ => "Attribute detection failed. You can fill in the details manually.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_errors_are_recoverable() {
        assert!(AnalysisError::EmptyImage.is_recoverable());
        assert!(AnalysisError::InvalidDimensions {
            width: 0,
            height: 50
        }
        .is_recoverable());
        assert!(AnalysisError::invalid_color_format("#12").is_recoverable());
    }

    #[test]
    fn test_configuration_errors_are_not_recoverable() {
        assert!(!AnalysisError::invalid_configuration("empty table").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InvalidDimensions {
            width: 0,
            height: 50,
        };
        assert_eq!(err.to_string(), "Invalid image dimensions: 0x50");

        let err = AnalysisError::invalid_color_format("12AB56");
        assert!(err.to_string().contains("#RRGGBB"));
    }

    #[test]
    fn test_user_messages_point_at_manual_fallback() {
        let errors = [
            AnalysisError::EmptyImage,
            AnalysisError::InvalidDimensions {
                width: 10,
                height: 0,
            },
            AnalysisError::invalid_color_format("blue"),
        ];
        for err in errors {
            assert!(err.user_message().contains("Please") || err.user_message().contains("manually"));
        }
    }
}
