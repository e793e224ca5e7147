//! Garment category detection module
//!
//! Coarse, deterministic bucketing of garment photos into categories
//! using image geometry.

pub mod category;

pub use category::{CategoryClassifier, GarmentCategory};
