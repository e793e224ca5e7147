//! Nearest-name color classification
//!
//! Maps an arbitrary RGB color to the closest entry of the injected
//! [`NamedColorTable`] by Euclidean RGB distance.

use crate::color::conversion::distance;
use crate::color::types::Color;
use crate::config::{NamedColorEntry, NamedColorTable};

/// Resolves colors to human-readable names against a fixed table
///
/// Constructed once with the table and shared read-only; the scan is a
/// plain linear pass, cheap at the table sizes involved.
pub struct ColorNamer {
    table: NamedColorTable,
}

impl ColorNamer {
    /// Create a namer over the given table
    pub fn new(table: NamedColorTable) -> Self {
        Self { table }
    }

    /// The table this namer classifies against
    pub fn table(&self) -> &NamedColorTable {
        &self.table
    }

    /// Find the table entry nearest to `color`
    ///
    /// On an exact distance tie the entry earlier in table order wins;
    /// the strict `<` comparison below is what enforces that.
    pub fn nearest(&self, color: Color) -> &NamedColorEntry {
        let entries = self.table.entries();
        let mut best = &entries[0];
        let mut best_distance = distance(color, best.color);

        for entry in &entries[1..] {
            let d = distance(color, entry.color);
            if d < best_distance {
                best = entry;
                best_distance = d;
            }
        }

        best
    }

    /// Name of the nearest table entry
    pub fn name(&self, color: Color) -> &str {
        &self.nearest(color).name
    }
}
