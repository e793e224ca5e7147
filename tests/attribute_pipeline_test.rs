//! Integration tests for the garment attribute pipeline
//!
//! These tests validate the end-to-end analysis workflow including:
//! - RGB ↔ HSL round trips and color distance properties
//! - Nearest-name classification against the reference table
//! - Companion palette generation
//! - Category classification and its error cases
//! - Label text extraction
//! - Outfit ranking stability and pagination
//! - Weather suitability mapping

use chrono::{DateTime, Utc};
use wardrobe_vision::color::conversion::{distance, hsl_to_rgb, rgb_to_hsl};
use wardrobe_vision::{
    AnalysisError, CategoryClassifier, Color, ColorNamer, DecodedImage, DominantColorExtractor,
    Garment, GarmentAnalyzer, GarmentCategory, LabelTextExtractor, NamedColorTable, Outfit,
    OutfitRecommender, PaletteGenerator, UserPreference, WeatherCondition, WeatherSnapshot,
    WeatherSuitabilityMapper,
};

// ============================================================================
// Color math properties
// ============================================================================

#[test]
fn test_hsl_round_trip_over_sampled_grid() {
    // Sample the RGB cube on a coarse grid; every point must round-trip
    // within ±1 per channel
    for r in (0..=255u16).step_by(17) {
        for g in (0..=255u16).step_by(17) {
            for b in (0..=255u16).step_by(17) {
                let color = Color::new(r as u8, g as u8, b as u8);
                let back = hsl_to_rgb(rgb_to_hsl(color));
                assert!(
                    (back.r as i32 - color.r as i32).abs() <= 1
                        && (back.g as i32 - color.g as i32).abs() <= 1
                        && (back.b as i32 - color.b as i32).abs() <= 1,
                    "{:?} round-tripped to {:?}",
                    color,
                    back
                );
            }
        }
    }
}

#[test]
fn test_distance_identity_and_symmetry() {
    let a = Color::new(12, 200, 3);
    let b = Color::new(88, 10, 255);
    assert_eq!(distance(a, a), 0.0);
    assert_eq!(distance(b, b), 0.0);
    assert_eq!(distance(a, b), distance(b, a));
    assert!(distance(a, b) > 0.0);
}

#[test]
fn test_hex_round_trip_over_sampled_grid() {
    for r in (0..=255u16).step_by(15) {
        for g in (0..=255u16).step_by(15) {
            for b in (0..=255u16).step_by(15) {
                let color = Color::new(r as u8, g as u8, b as u8);
                assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
            }
        }
    }
}

// ============================================================================
// Color naming and palette
// ============================================================================

#[test]
fn test_namer_returns_stored_name_for_every_table_color() {
    let table = NamedColorTable::reference();
    let namer = ColorNamer::new(table.clone());
    for entry in table.entries() {
        assert_eq!(namer.name(entry.color), entry.name);
    }
}

#[test]
fn test_palette_of_gray_is_five_copies() {
    let gray = Color::new(100, 100, 100);
    let palette = PaletteGenerator::new().generate(gray);
    assert_eq!(palette, vec![gray; 5]);
}

#[test]
fn test_palette_order_is_analogous_complementary_triadic() {
    let palette = PaletteGenerator::new().generate(Color::new(255, 0, 0));
    let hues: Vec<f32> = palette.iter().map(|c| rgb_to_hsl(*c).hue).collect();
    assert!((hues[0] - 30.0).abs() < 1.0);
    assert!((hues[1] - 330.0).abs() < 1.0);
    assert!((hues[2] - 180.0).abs() < 1.0);
    assert!((hues[3] - 120.0).abs() < 1.0);
    assert!((hues[4] - 240.0).abs() < 1.0);
}

// ============================================================================
// Category classification
// ============================================================================

#[test]
fn test_category_buckets() {
    let classifier = CategoryClassifier::new();
    assert_eq!(classifier.classify(100, 40).unwrap(), GarmentCategory::Shoes);
    assert_eq!(
        classifier.classify(40, 100).unwrap(),
        GarmentCategory::Bottoms
    );
    assert_eq!(classifier.classify(80, 100).unwrap(), GarmentCategory::Tops);
    assert_eq!(classifier.classify(120, 100).unwrap(), GarmentCategory::Tops);
}

#[test]
fn test_category_rejects_zero_dimension() {
    let classifier = CategoryClassifier::new();
    assert!(matches!(
        classifier.classify(0, 50),
        Err(AnalysisError::InvalidDimensions { .. })
    ));
}

// ============================================================================
// Dominant color
// ============================================================================

#[test]
fn test_dominant_color_requires_pixels() {
    let extractor = DominantColorExtractor::new();
    assert!(matches!(
        extractor.extract(&[]),
        Err(AnalysisError::EmptyImage)
    ));
}

#[test]
fn test_dominant_color_is_channel_mean() {
    let extractor = DominantColorExtractor::new();
    let pixels = [[0u8, 0, 0], [200, 100, 50]];
    assert_eq!(extractor.extract(&pixels).unwrap(), Color::new(100, 50, 25));
}

// ============================================================================
// Label extraction
// ============================================================================

#[test]
fn test_label_extraction_reference_case() {
    let attrs = LabelTextExtractor::new().extract("Brand: Nike, Size: M, 100% Cotton");
    assert_eq!(attrs.brand.as_deref(), Some("Nike"));
    assert_eq!(attrs.size.as_deref(), Some("M"));
    assert_eq!(attrs.material.as_deref(), Some("Cotton"));
}

#[test]
fn test_label_extraction_absent_fields_are_not_errors() {
    let attrs = LabelTextExtractor::new().extract("dry clean only");
    assert!(attrs.brand.is_none());
    assert!(attrs.size.is_none());
    assert!(attrs.material.is_none());
}

// ============================================================================
// Outfit ranking
// ============================================================================

fn navy_top() -> Garment {
    Garment {
        id: "g1".to_string(),
        category: "tops".to_string(),
        color: "navy".to_string(),
        secondary_color: None,
        image_url: None,
    }
}

fn red_shoes() -> Garment {
    Garment {
        id: "g2".to_string(),
        category: "shoes".to_string(),
        color: "red".to_string(),
        secondary_color: None,
        image_url: None,
    }
}

fn outfit(id: &str, garments: Vec<Garment>) -> Outfit {
    Outfit {
        id: id.to_string(),
        garments,
        rating: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        owner_id: "user-1".to_string(),
    }
}

#[test]
fn test_ranking_preserves_input_order_on_ties() {
    let recommender = OutfitRecommender::new();
    let outfits = [
        outfit("a", vec![navy_top(), red_shoes()]),
        outfit("b", vec![red_shoes(), navy_top()]),
        outfit("c", vec![red_shoes()]),
    ];
    let prefs = [UserPreference {
        category: "tops".to_string(),
        color: "navy".to_string(),
    }];

    let ranked = recommender.rank(&outfits, &prefs);
    let ids: Vec<&str> = ranked.iter().map(|r| r.outfit.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_ranking_with_no_preferences_is_empty() {
    let recommender = OutfitRecommender::new();
    let outfits = [outfit("a", vec![navy_top()]), outfit("b", vec![red_shoes()])];
    assert!(recommender.rank(&outfits, &[]).is_empty());
}

#[test]
fn test_page_ranking_matches_full_ranking() {
    let recommender = OutfitRecommender::new();
    let outfits: Vec<Outfit> = (0..10)
        .map(|i| {
            let garments = (0..=(i % 4)).map(|_| navy_top()).collect();
            outfit(&format!("o{i}"), garments)
        })
        .collect();
    let prefs = [UserPreference {
        category: "tops".to_string(),
        color: "navy".to_string(),
    }];

    let full = recommender.rank(&outfits, &prefs);
    let page: Vec<&str> = recommender
        .rank_page(&outfits, &prefs, 3, 4)
        .iter()
        .map(|r| r.outfit.id.as_str())
        .collect();
    let expected: Vec<&str> = full[3..7].iter().map(|r| r.outfit.id.as_str()).collect();
    assert_eq!(page, expected);
}

// ============================================================================
// Weather suitability
// ============================================================================

#[test]
fn test_snowy_cold_day() {
    let suitability = WeatherSuitabilityMapper::new().map(&WeatherSnapshot {
        temperature: 2.0,
        weather_code: 73,
    });
    assert_eq!(suitability.description, "Neige");
    assert!(suitability.conditions.contains(&WeatherCondition::Snow));
    assert!(suitability.conditions.contains(&WeatherCondition::Cold));
}

#[test]
fn test_mild_clear_day_has_no_conditions() {
    let suitability = WeatherSuitabilityMapper::new().map(&WeatherSnapshot {
        temperature: 18.0,
        weather_code: 0,
    });
    assert_eq!(suitability.description, "Ciel dégagé");
    assert!(suitability.conditions.is_empty());
}

// ============================================================================
// End-to-end analysis
// ============================================================================

#[test]
fn test_full_analysis_of_a_product_photo() {
    let analyzer = GarmentAnalyzer::with_reference_table();

    // Tall 60x120 shot of a red garment with OCR'd label text
    let image = DecodedImage::new(60, 120, vec![[250, 5, 5]; 60 * 120]).unwrap();
    let attributes = analyzer
        .analyze(&image, Some("Taille: 40, 100% coton, by Agnès"))
        .unwrap();

    assert_eq!(attributes.category, GarmentCategory::Bottoms);
    assert_eq!(attributes.color_name, "red");
    assert_eq!(attributes.palette.len(), 5);
    assert_eq!(attributes.label.size.as_deref(), Some("40"));
    assert_eq!(attributes.label.material.as_deref(), Some("coton"));
    assert_eq!(attributes.label.brand.as_deref(), Some("Agnès"));
}

#[test]
fn test_analysis_errors_are_marked_recoverable() {
    let analyzer = GarmentAnalyzer::with_reference_table();
    let err = analyzer.resolve_color("bleu marine").unwrap_err();
    assert!(err.is_recoverable());
    assert!(!err.user_message().is_empty());
}
