//! Final table shaping
//!
//! Drops the pre-data rows (headings, units, blanks used only for
//! validation) and fixes every remaining row to exactly the schema's
//! width: excess trailing cells are discarded, short rows are padded
//! with nulls so the post-trim width invariant holds for every row.

use super::{Row, Table};
use crate::schema::Schema;

/// Trim a converted grid down to the declared table shape
pub fn trim(mut rows: Vec<Row>, schema: &Schema) -> Table {
    let data_row = schema.data_row().min(rows.len());
    let field_count = schema.field_count();

    rows.drain(..data_row);
    for row in &mut rows {
        row.truncate(field_count);
        row.resize(field_count, None);
    }
    rows
}
