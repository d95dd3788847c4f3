//! Heading and unit row verification
//!
//! Structural mismatches abort the whole parse: if the heading row does
//! not match the declared field names, downstream column indices would
//! be meaningless, so no partial table is ever returned.

use crate::schema::Schema;
use crate::{Error, Result};
use tracing::debug;

/// Check the tokenized grid's heading and unit rows against the schema
///
/// Checks are skipped entirely for rows the schema does not declare.
/// The compared row is truncated to the schema's field count, so extra
/// trailing columns in the file do not fail validation.
pub fn validate(grid: &[Vec<String>], schema: &Schema) -> Result<()> {
    if let Some(row) = schema.heading_row() {
        let expected = schema.field_names();
        let actual = row_prefix(grid, row, schema.field_count());
        if actual != expected {
            return Err(Error::HeaderMismatch { expected, actual });
        }
        debug!("Heading row {} matches schema", row);
    }

    if let Some(row) = schema.unit_row() {
        let expected = schema.field_units();
        let actual = row_prefix(grid, row, schema.field_count());
        if actual != expected {
            return Err(Error::UnitMismatch { expected, actual });
        }
        debug!("Unit row {} matches schema", row);
    }

    Ok(())
}

/// First `count` cells of a grid row; a row index past the end of the
/// grid yields an empty prefix, which is reported as the actual row in
/// the mismatch error
fn row_prefix(grid: &[Vec<String>], row: usize, count: usize) -> Vec<String> {
    match grid.get(row) {
        Some(cells) => cells.iter().take(count).cloned().collect(),
        None => Vec::new(),
    }
}
