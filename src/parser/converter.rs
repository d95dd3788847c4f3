//! Per-cell type checking and conversion
//!
//! Walks every data row, checks each cell against its column's type,
//! converts matches, and nulls out failures while tallying them. Row
//! count and widths are preserved through this stage so column
//! statistics stay aligned index-for-index with the original grid; the
//! trimmer is responsible for dropping pre-data rows afterwards.

use super::stats::ColumnStats;
use super::{Cell, Row};
use crate::schema::{Schema, Value};
use tracing::{debug, trace};

/// Typed grid plus accumulated statistics, prior to trimming
#[derive(Debug, Clone)]
pub struct ConvertedGrid {
    /// All rows of the input grid, pre-data rows passed through as text
    pub rows: Vec<Row>,

    /// Null and error tallies for the data rows
    pub stats: ColumnStats,
}

/// Check and convert every data cell in the grid
///
/// Cells that fail their column's type check become `None`: a cell
/// matching the schema's empty-cell pattern counts as null, anything
/// else counts as an error. A conversion that fails despite a pattern
/// match (numeric overflow) is recovered the same way, as an error.
/// Rows shorter than the schema count the missing cells as nulls.
pub fn convert(grid: Vec<Vec<String>>, schema: &Schema) -> ConvertedGrid {
    let field_count = schema.field_count();
    let data_row = schema.data_row();
    let mut stats = ColumnStats::new(field_count);

    let rows = grid
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if i < data_row {
                pass_through(row)
            } else {
                convert_row(row, schema, &mut stats)
            }
        })
        .collect();

    debug!(
        "Converted data rows: {} empty cells, {} unreadable values",
        stats.total_nulls(),
        stats.total_errors()
    );

    ConvertedGrid { rows, stats }
}

/// Pre-data rows (headings, units, blanks) are only needed for width
/// alignment until the trimmer drops them
fn pass_through(row: Vec<String>) -> Row {
    row.into_iter().map(|cell| Some(Value::Text(cell))).collect()
}

fn convert_row(row: Vec<String>, schema: &Schema, stats: &mut ColumnStats) -> Row {
    let field_count = schema.field_count();
    let mut cells: Vec<Cell> = Vec::with_capacity(row.len().max(field_count));
    let mut raw = row.into_iter();

    for (j, field) in schema.fields().iter().enumerate().take(field_count) {
        let cell = match raw.next() {
            Some(cell) => cell,
            None => {
                // Missing trailing cell: treated as intentionally blank
                stats.null_count[j] += 1;
                cells.push(None);
                continue;
            }
        };

        if !field.field_type.check(&cell) {
            if schema.empty_cell().is_match(&cell) {
                stats.null_count[j] += 1;
            } else {
                stats.error_count[j] += 1;
            }
            cells.push(None);
            continue;
        }

        match field.field_type.convert(&cell) {
            Ok(value) => cells.push(Some(value)),
            Err(e) => {
                // Pattern matched but the parse failed (e.g. overflow)
                trace!("Conversion failure in column {}: {}", field.name, e);
                stats.error_count[j] += 1;
                cells.push(None);
            }
        }
    }

    // Cells beyond the schema width survive untyped until the trimmer
    // truncates them
    cells.extend(raw.map(|cell| Some(Value::Text(cell))));
    cells
}
