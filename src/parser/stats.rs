//! Per-column null and error accounting
//!
//! Separating "recognized empty marker" from "garbage that failed the
//! type check" lets downstream consumers distinguish missing data from
//! data quality problems without losing row alignment: both kinds of
//! cell become null in the table, but the counts differ.

use crate::schema::Schema;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Null and error tallies accumulated during one parse call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Cells recognized as intentionally blank, per column
    pub null_count: Vec<usize>,

    /// Cells that failed their column's type check (or conversion), per column
    pub error_count: Vec<usize>,
}

impl ColumnStats {
    /// Create zeroed statistics for a column count
    pub fn new(columns: usize) -> Self {
        Self {
            null_count: vec![0; columns],
            error_count: vec![0; columns],
        }
    }

    /// Total empty cells across all columns
    pub fn total_nulls(&self) -> usize {
        self.null_count.iter().sum()
    }

    /// Total unreadable cells across all columns
    pub fn total_errors(&self) -> usize {
        self.error_count.iter().sum()
    }

    /// True when every cell matched its column's type
    pub fn is_clean(&self) -> bool {
        self.total_nulls() == 0 && self.total_errors() == 0
    }

    /// Render a per-column summary for terminal display
    ///
    /// Columns with unreadable values are highlighted; the caller decides
    /// whether non-zero counts warrant a warning.
    pub fn report(&self, schema: &Schema) -> String {
        let mut out = String::from("File has been read; errors and empty cells by column:\n");

        out.push_str("  Unreadable values: ");
        for (field, count) in schema.fields().iter().zip(&self.error_count) {
            let entry = format!("{} = {}; ", field.name, count);
            if *count > 0 {
                out.push_str(&entry.red().bold().to_string());
            } else {
                out.push_str(&entry);
            }
        }

        out.push_str("\n  Empty cells: ");
        for (field, count) in schema.fields().iter().zip(&self.null_count) {
            let entry = format!("{} = {}; ", field.name, count);
            if *count > 0 {
                out.push_str(&entry.yellow().to_string());
            } else {
                out.push_str(&entry);
            }
        }
        out.push('\n');

        out
    }
}
