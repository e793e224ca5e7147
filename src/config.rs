//! Configuration for the garment attribute pipeline
//!
//! The only tunable configuration is the named color table used by the
//! nearest-name classifier. It is an explicitly constructed, immutable
//! value injected at analyzer construction time rather than a module-level
//! global: the "load once" lifecycle is preserved (build it at startup,
//! share it read-only everywhere) without hidden state.
//!
//! # Configuration Loading
//!
//! The table can be loaded from a JSON file or constructed
//! programmatically:
//!
//! ```no_run
//! use wardrobe_vision::NamedColorTable;
//! use std::path::Path;
//!
//! // Load from file
//! let table = NamedColorTable::from_json_file(Path::new("colors.json"))?;
//!
//! // Or use the built-in reference table
//! let table = NamedColorTable::reference();
//! # Ok::<(), wardrobe_vision::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::types::Color;
use crate::error::{AnalysisError, Result};

/// One named reference color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColorEntry {
    /// Human-readable name (e.g. "navy")
    pub name: String,
    /// Reference color the name is anchored to
    pub color: Color,
}

/// Immutable, ordered table of named reference colors
///
/// Iteration order matters: when two entries are exactly equidistant from
/// an input color, the earlier entry wins. The order below is therefore
/// part of the observable behavior and must not be rearranged.
///
/// Serializes as a plain entry array; deserialization goes through
/// [`NamedColorTable::new`] so an empty table can never be constructed,
/// not even from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NamedColorEntry>", into = "Vec<NamedColorEntry>")]
pub struct NamedColorTable {
    entries: Vec<NamedColorEntry>,
}

impl TryFrom<Vec<NamedColorEntry>> for NamedColorTable {
    type Error = AnalysisError;

    fn try_from(entries: Vec<NamedColorEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<NamedColorTable> for Vec<NamedColorEntry> {
    fn from(table: NamedColorTable) -> Self {
        table.entries
    }
}

/// Reference entries, in classification priority order
const REFERENCE_ENTRIES: [(&str, [u8; 3]); 20] = [
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("dark-green", [0, 100, 0]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("navy", [0, 0, 128]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("gold", [255, 215, 0]),
    ("silver", [192, 192, 192]),
];

impl NamedColorTable {
    /// Build a table from explicit entries
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfiguration`] if `entries` is
    /// empty; the nearest-name scan requires at least one candidate.
    pub fn new(entries: Vec<NamedColorEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AnalysisError::invalid_configuration(
                "named color table must contain at least one entry",
            ));
        }
        Ok(Self { entries })
    }

    /// The built-in reference table used by the production pipeline
    pub fn reference() -> Self {
        Self {
            entries: REFERENCE_ENTRIES
                .iter()
                .map(|(name, [r, g, b])| NamedColorEntry {
                    name: (*name).to_string(),
                    color: Color::new(*r, *g, *b),
                })
                .collect(),
        }
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the JSON is malformed,
    /// or the table is empty
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: Self = serde_json::from_str(&content)?;
        Ok(table)
    }

    /// Save the table to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Entries in classification priority order
    pub fn entries(&self) -> &[NamedColorEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries (never true for validated tables)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
