//! Weather suitability mapping
//!
//! Converts a raw weather observation (temperature + WMO present-weather
//! code) into the discrete condition set and short description used when
//! building a recommendation request. The structured bundle is handed to
//! the suggestion-text collaborator; no prose is produced here, and the
//! derived fields are always recomputed from the raw observation, never
//! stored as authoritative.

use serde::{Deserialize, Serialize};

use crate::constants::weather::{
    COLD_BELOW_CELSIUS, FOG_CODES, HOT_ABOVE_CELSIUS, RAIN_CODES, SNOW_CODES,
};

/// Raw weather observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in °C
    pub temperature: f32,
    /// WMO present-weather code (0 = clear, 45-48 = fog, 51-67 = rain,
    /// 71-77 = snow, ...)
    pub weather_code: u16,
}

/// Discrete condition tags derived from an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Rain,
    Snow,
    Fog,
    Cold,
    Hot,
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WeatherCondition::Rain => "rain",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Hot => "hot",
        };
        f.write_str(name)
    }
}

/// Structured suitability bundle consumed by the suggestion-text
/// collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSuitability {
    /// Temperature in °C, passed through from the observation
    pub temperature: f32,
    /// Short condition description for display
    pub description: String,
    /// Condition tags, in derivation order: rain, snow, fog, cold, hot
    pub conditions: Vec<WeatherCondition>,
}

/// Maps raw observations to suitability bundles
pub struct WeatherSuitabilityMapper;

impl Default for WeatherSuitabilityMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSuitabilityMapper {
    /// Create a new mapper
    pub fn new() -> Self {
        Self
    }

    /// Derive the description and condition set for an observation
    pub fn map(&self, snapshot: &WeatherSnapshot) -> WeatherSuitability {
        let mut conditions = Vec::new();
        if RAIN_CODES.contains(&snapshot.weather_code) {
            conditions.push(WeatherCondition::Rain);
        }
        if SNOW_CODES.contains(&snapshot.weather_code) {
            conditions.push(WeatherCondition::Snow);
        }
        if FOG_CODES.contains(&snapshot.weather_code) {
            conditions.push(WeatherCondition::Fog);
        }
        // Independent checks, not an if/else: a mild 10-25 °C day carries
        // neither tag
        if snapshot.temperature < COLD_BELOW_CELSIUS {
            conditions.push(WeatherCondition::Cold);
        }
        if snapshot.temperature > HOT_ABOVE_CELSIUS {
            conditions.push(WeatherCondition::Hot);
        }

        WeatherSuitability {
            temperature: snapshot.temperature,
            description: describe(snapshot.weather_code).to_string(),
            conditions,
        }
    }
}

/// Display string for a WMO present-weather code
fn describe(code: u16) -> &'static str {
    match code {
        0 => "Ciel dégagé",
        1 => "Peu nuageux",
        2 => "Partiellement nuageux",
        3 => "Couvert",
        45..=48 => "Brouillard",
        51..=67 => "Pluie",
        71..=77 => "Neige",
        _ => "Conditions variables",
    }
}
