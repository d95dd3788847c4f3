//! Test helpers shared across parser test modules

use crate::schema::{Schema, SchemaBuilder, TypeRegistry};

mod grouping_tests;

/// Three-column weather schema with a heading row, used as the common
/// fixture: year, month, and a float measurement
pub fn small_schema() -> Schema {
    let registry = TypeRegistry::with_builtins();
    SchemaBuilder::new()
        .fields_from_lists("yyyy, mm, tmax", "date, integer, float")
        .heading_row(0)
        .data_row(1)
        .build(&registry)
        .unwrap()
}

/// Headerless variant: every row is data
pub fn headerless_schema() -> Schema {
    let registry = TypeRegistry::with_builtins();
    SchemaBuilder::new()
        .fields_from_lists("yyyy, mm, tmax", "date, integer, float")
        .build(&registry)
        .unwrap()
}

/// Grid form of a small CSV text, for driving single stages directly
pub fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
