//! Outfit ranking against stored user preferences
//!
//! Scores candidate outfits by counting category and color matches
//! between their garments and the user's stored affinities, then ranks
//! them. Scoring always runs over the full candidate set before any
//! pagination so the ranking is stable across pages.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

/// A catalogued garment, as delivered read-only by the data backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garment {
    pub id: String,
    pub category: String,
    pub color: String,
    pub secondary_color: Option<String>,
    pub image_url: Option<String>,
}

/// An outfit assembled from catalogued garments
///
/// The garment list is non-empty by backend contract; this subsystem
/// consumes it read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    pub garments: Vec<Garment>,
    pub rating: Option<f32>,
    pub created_at: DateTime<Utc>,
    pub owner_id: String,
}

/// One stored (category, color) affinity pair
///
/// The set of preferences is unordered and duplicates collapse during
/// scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPreference {
    pub category: String,
    pub color: String,
}

/// An outfit paired with its preference score
#[derive(Debug, Clone)]
pub struct RankedOutfit<'a> {
    pub outfit: &'a Outfit,
    pub score: u32,
}

/// Ranks candidate outfits against a user's stored preferences
pub struct OutfitRecommender;

impl Default for OutfitRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl OutfitRecommender {
    /// Create a new recommender
    pub fn new() -> Self {
        Self
    }

    /// Score and rank every candidate outfit, best first
    ///
    /// Each garment contributes one point for a preferred category and one
    /// for a preferred color. The sort is stable: equal-score outfits keep
    /// their input order, so repeated calls over the same data rank
    /// identically.
    ///
    /// An empty preference set returns an empty result rather than an
    /// unscored pass-through; no preference signal means there is nothing
    /// to recommend.
    pub fn rank<'a>(
        &self,
        outfits: &'a [Outfit],
        preferences: &[UserPreference],
    ) -> Vec<RankedOutfit<'a>> {
        if preferences.is_empty() {
            return Vec::new();
        }

        let categories: HashSet<&str> = preferences.iter().map(|p| p.category.as_str()).collect();
        let colors: HashSet<&str> = preferences.iter().map(|p| p.color.as_str()).collect();

        let mut ranked: Vec<RankedOutfit<'a>> = outfits
            .iter()
            .map(|outfit| {
                let score = preference_score(outfit, &categories, &colors);
                trace!("outfit {} scored {}", outfit.id, score);
                RankedOutfit { outfit, score }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Rank the full candidate set, then return one page of results
    ///
    /// `offset` skips past already-served results; `limit` caps the page
    /// size. Scoring is never computed per-page.
    pub fn rank_page<'a>(
        &self,
        outfits: &'a [Outfit],
        preferences: &[UserPreference],
        offset: usize,
        limit: usize,
    ) -> Vec<RankedOutfit<'a>> {
        self.rank(outfits, preferences)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect()
    }
}

fn preference_score(
    outfit: &Outfit,
    categories: &HashSet<&str>,
    colors: &HashSet<&str>,
) -> u32 {
    outfit
        .garments
        .iter()
        .map(|garment| {
            u32::from(categories.contains(garment.category.as_str()))
                + u32::from(colors.contains(garment.color.as_str()))
        })
        .sum()
}
