//! Classification thresholds and reference values for garment analysis
//!
//! This module contains compile-time constants for the heuristic
//! classifiers. The values reproduce the observed behavior of the
//! production tagging pipeline and are part of the external contract;
//! changing them changes which bucket existing photos land in.

/// Category classification thresholds (image aspect ratio, width / height)
pub mod category {
    /// Ratio above which an image is classified as shoes (wide shots)
    pub const SHOES_MIN_RATIO: f32 = 1.5;

    /// Ratio below which an image is classified as bottoms (tall shots)
    pub const BOTTOMS_MAX_RATIO: f32 = 0.7;

    /// Upper bound of the explicit tops band; squarer images fall back
    /// to tops as the default bucket
    pub const TOPS_MAX_RATIO: f32 = 0.9;
}

/// Weather suitability thresholds (WMO interpretation table)
pub mod weather {
    use std::ops::RangeInclusive;

    /// WMO codes reported as rain or drizzle
    pub const RAIN_CODES: RangeInclusive<u16> = 51..=67;

    /// WMO codes reported as snow
    pub const SNOW_CODES: RangeInclusive<u16> = 71..=77;

    /// WMO codes reported as fog
    pub const FOG_CODES: RangeInclusive<u16> = 45..=48;

    /// Temperatures strictly below this are tagged cold (°C)
    pub const COLD_BELOW_CELSIUS: f32 = 10.0;

    /// Temperatures strictly above this are tagged hot (°C)
    pub const HOT_ABOVE_CELSIUS: f32 = 25.0;
}

/// Label text extraction bounds
pub mod label {
    /// Smallest bare numeric token accepted as a European garment size
    pub const NUMERIC_SIZE_MIN: u32 = 34;

    /// Largest bare numeric token accepted as a European garment size
    pub const NUMERIC_SIZE_MAX: u32 = 52;
}
