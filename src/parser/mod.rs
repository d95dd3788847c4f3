//! Schema-driven parsing pipeline
//!
//! The pipeline runs in fixed stages over an in-memory string:
//! [`tokenizer`] splits the text into a grid of cells, [`validator`]
//! checks the heading and unit rows against the schema, [`converter`]
//! type-checks and converts every data cell while tallying nulls and
//! errors, and [`trimmer`] shapes the result to the declared width.
//! [`grouping`] provides secondary utilities over the parsed table.
//!
//! ## Usage
//!
//! ```rust
//! use csv_ingest::{Schema, TypeRegistry, parse};
//!
//! # fn example() -> csv_ingest::Result<()> {
//! let registry = TypeRegistry::with_builtins();
//! let schema = Schema::builder()
//!     .fields_from_lists("yyyy, mm, tmax", "date, integer, float")
//!     .heading_row(0)
//!     .data_row(1)
//!     .build(&registry)?;
//!
//! let outcome = parse("yyyy,mm,tmax\n2000,1,12.5", &schema)?;
//! assert_eq!(outcome.table.len(), 1);
//! assert!(outcome.stats.is_clean());
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod grouping;
pub mod stats;
pub mod tokenizer;
pub mod trimmer;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grouping::{GroupedTables, LabeledTable, group_by_value, label, transpose};
pub use stats::ColumnStats;

use crate::Result;
use crate::schema::{Schema, Value};
use tracing::info;

/// One table cell: `None` marks a cell recognized as empty or one that
/// failed its column's type check (the statistics tell them apart)
pub type Cell = Option<Value>;

/// One table row, exactly `field_count` cells wide after trimming
pub type Row = Vec<Cell>;

/// Ordered rows of typed cells
pub type Table = Vec<Row>;

/// Parsed table plus per-column accounting
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Data rows, trimmed to the schema width
    pub table: Table,

    /// Null and error tallies, one entry per schema field
    pub stats: ColumnStats,
}

/// Parse raw text against a schema
///
/// This is the single entry point of the core: a pure, deterministic
/// function of its inputs with no state shared between calls. Structural
/// mismatches (wrong headings or units) abort with an error and no
/// partial table; per-cell type failures are recovered into nulls and
/// counted in the returned statistics.
pub fn parse(text: &str, schema: &Schema) -> Result<ParseOutcome> {
    let grid = tokenizer::tokenize(text, schema);
    validator::validate(&grid, schema)?;
    let converted = converter::convert(grid, schema);
    let table = trimmer::trim(converted.rows, schema);

    info!(
        "Parsed {} rows x {} columns ({} empty, {} unreadable)",
        table.len(),
        schema.field_count(),
        converted.stats.total_nulls(),
        converted.stats.total_errors()
    );

    Ok(ParseOutcome {
        table,
        stats: converted.stats,
    })
}
