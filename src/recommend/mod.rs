//! Outfit recommendation module
//!
//! This module handles preference-based outfit ranking and the weather
//! suitability mapping used to enrich recommendation requests.

pub mod outfit;
pub mod weather;

pub use outfit::{Garment, Outfit, OutfitRecommender, RankedOutfit, UserPreference};
pub use weather::{WeatherCondition, WeatherSnapshot, WeatherSuitability, WeatherSuitabilityMapper};
