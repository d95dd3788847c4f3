//! Row bucketing and table transposition
//!
//! Secondary utilities over a parsed table: bucketing rows by an integer
//! key column into a contiguous value range, and converting row-oriented
//! tables to column-oriented form for presentation and analysis.

use super::{Cell, Table};
use crate::constants::MAX_GROUP_BUCKETS;
use crate::schema::Schema;
use crate::{Error, Result};
use indexmap::IndexMap;
use tracing::warn;

/// Result of bucketing a table by a key column
///
/// Quality degradation is reported, not fatal: rows whose key falls
/// outside the range are dropped and counted, and the operation still
/// returns its buckets.
#[derive(Debug, Clone)]
pub struct GroupedTables {
    /// One sub-table per key value, indexed by `key - min`
    pub buckets: Vec<Table>,

    /// Rows dropped because their key fell outside the range
    pub rejected: usize,
}

/// Bucket table rows by an integer value in `key_column`
///
/// The range is half-open: a key belongs to bucket `key - min` when
/// `min <= key < max`, so the result always holds exactly `max - min`
/// buckets (some possibly empty). Ranges spanning more than
/// [`MAX_GROUP_BUCKETS`] buckets are rejected. Rows with a null or
/// non-integer key are skipped without being counted as rejections.
pub fn group_by_value(
    table: Table,
    schema: &Schema,
    key_column: usize,
    min: i64,
    max: i64,
) -> Result<GroupedTables> {
    if key_column >= schema.field_count() {
        return Err(Error::configuration(format!(
            "key column {} is outside the schema width {}",
            key_column,
            schema.field_count()
        )));
    }

    if max <= min {
        return Err(Error::configuration(format!(
            "invalid key range: min {} is not below max {}",
            min, max
        )));
    }

    // checked_sub guards i64 overflow for extreme min/max pairs
    let bucket_count = max
        .checked_sub(min)
        .and_then(|span| usize::try_from(span).ok())
        .filter(|span| *span <= MAX_GROUP_BUCKETS)
        .ok_or_else(|| {
            Error::configuration(format!(
                "key range {}..{} spans more than {} buckets",
                min, max, MAX_GROUP_BUCKETS
            ))
        })?;

    let mut buckets: Vec<Table> = vec![Vec::new(); bucket_count];
    let mut rejected = 0usize;

    for row in table {
        let key = row
            .get(key_column)
            .and_then(|cell| cell.as_ref())
            .and_then(|value| value.as_int());

        match key {
            Some(key) if (min..max).contains(&key) => {
                buckets[(key - min) as usize].push(row);
            }
            Some(_) => rejected += 1,
            // Nulled cells carry no key to bucket by
            None => {}
        }
    }

    if rejected > 0 {
        warn!(
            "{} rows rejected: key values fell outside the range {}..{}",
            rejected, min, max
        );
    }

    Ok(GroupedTables { buckets, rejected })
}

/// Convert each row-oriented sub-table to column-oriented form
///
/// Columns are zipped together, so a ragged sub-table transposes to the
/// width of its shortest row. Parsed tables are rectangular after
/// trimming, which makes this lossless in the normal pipeline.
pub fn transpose(tables: Vec<Table>) -> Vec<Table> {
    tables.into_iter().map(transpose_table).collect()
}

fn transpose_table(table: Table) -> Table {
    let Some(width) = table.iter().map(|row| row.len()).min() else {
        return Vec::new();
    };

    let mut columns: Table = vec![Vec::with_capacity(table.len()); width];
    for row in table {
        for (j, cell) in row.into_iter().enumerate().take(width) {
            columns[j].push(cell);
        }
    }
    columns
}

/// Column-keyed view of a parsed table
#[derive(Debug, Clone)]
pub struct LabeledTable {
    /// Number of data rows
    pub len: usize,

    /// Columns keyed by field name, in schema order
    pub columns: IndexMap<String, Vec<Cell>>,

    /// Unit per field name, in schema order
    pub units: IndexMap<String, Option<String>>,
}

/// Build a column-keyed view of a post-trim table
///
/// Each schema field becomes an entry mapping its heading to the cells
/// of that column; insertion order follows the schema, so iterating the
/// map walks the columns left to right.
pub fn label(table: &Table, schema: &Schema) -> LabeledTable {
    let len = table.len();
    let mut columns: IndexMap<String, Vec<Cell>> = IndexMap::new();
    let mut units: IndexMap<String, Option<String>> = IndexMap::new();

    for (j, field) in schema.fields().iter().enumerate() {
        let column = table.iter().map(|row| row.get(j).cloned().flatten()).collect();
        columns.insert(field.name.clone(), column);
        units.insert(field.name.clone(), field.unit.clone());
    }

    LabeledTable { len, columns, units }
}
