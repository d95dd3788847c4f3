//! Tests for row bucketing, transposition, and labeling

use super::small_schema;
use crate::Error;
use crate::parser::grouping::{group_by_value, label, transpose};
use crate::parser::{Row, Table};
use crate::schema::Value;

fn row(year: i64, month: i64, tmax: f64) -> Row {
    vec![
        Some(Value::Int(year)),
        Some(Value::Int(month)),
        Some(Value::Float(tmax)),
    ]
}

#[test]
fn test_rows_bucketed_by_key() {
    let schema = small_schema();
    let table: Table = vec![row(2000, 1, 10.0), row(2000, 2, 11.0), row(2001, 1, 12.0)];
    let grouped = group_by_value(table, &schema, 1, 1, 13).unwrap();

    assert_eq!(grouped.buckets.len(), 12);
    assert_eq!(grouped.buckets[0].len(), 2); // month 1
    assert_eq!(grouped.buckets[1].len(), 1); // month 2
    assert_eq!(grouped.rejected, 0);
}

#[test]
fn test_out_of_range_rows_rejected_and_counted() {
    let schema = small_schema();
    let table: Table = vec![row(2000, 7, 10.0), row(2000, 2, 11.0)];
    let grouped = group_by_value(table, &schema, 1, 0, 5).unwrap();

    // Exactly max - min buckets, the key 7 row dropped and counted
    assert_eq!(grouped.buckets.len(), 5);
    assert_eq!(grouped.rejected, 1);
    let kept: usize = grouped.buckets.iter().map(|b| b.len()).sum();
    assert_eq!(kept, 1);
}

#[test]
fn test_range_is_half_open() {
    let schema = small_schema();
    let table: Table = vec![row(2000, 1, 10.0), row(2000, 5, 11.0)];
    let grouped = group_by_value(table, &schema, 1, 1, 5).unwrap();

    assert_eq!(grouped.buckets.len(), 4);
    assert_eq!(grouped.buckets[0].len(), 1);
    assert_eq!(grouped.rejected, 1); // key == max falls outside
}

#[test]
fn test_null_keys_skipped_without_counting() {
    let schema = small_schema();
    let mut null_key = row(2000, 1, 10.0);
    null_key[1] = None;
    let table: Table = vec![null_key, row(2000, 2, 11.0)];
    let grouped = group_by_value(table, &schema, 1, 1, 13).unwrap();

    assert_eq!(grouped.rejected, 0);
    let kept: usize = grouped.buckets.iter().map(|b| b.len()).sum();
    assert_eq!(kept, 1);
}

#[test]
fn test_invalid_range_rejected() {
    let schema = small_schema();
    let err = group_by_value(vec![row(2000, 1, 10.0)], &schema, 1, 5, 5).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_key_column_out_of_bounds_rejected() {
    let schema = small_schema();
    let err = group_by_value(vec![row(2000, 1, 10.0)], &schema, 9, 1, 13).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    // Checked against the schema width, so an empty table fails too
    let err = group_by_value(Vec::new(), &schema, 99, 1, 13).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_extreme_range_rejected_without_panic() {
    let schema = small_schema();

    // Spans that overflow i64 subtraction
    let err = group_by_value(vec![row(2000, 1, 10.0)], &schema, 1, i64::MIN, i64::MAX).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    // Spans that fit in i64 but would allocate an absurd bucket list
    let err = group_by_value(vec![row(2000, 1, 10.0)], &schema, 1, 0, 10_000_000_000).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_transpose_zips_columns() {
    let tables = vec![vec![row(2000, 1, 10.0), row(2001, 2, 11.0)]];
    let transposed = transpose(tables);

    assert_eq!(transposed.len(), 1);
    let columns = &transposed[0];
    assert_eq!(columns.len(), 3);
    assert_eq!(
        columns[0],
        vec![Some(Value::Int(2000)), Some(Value::Int(2001))]
    );
    assert_eq!(
        columns[2],
        vec![Some(Value::Float(10.0)), Some(Value::Float(11.0))]
    );
}

#[test]
fn test_transpose_empty_table() {
    let transposed = transpose(vec![Vec::new()]);
    assert_eq!(transposed, vec![Vec::<Row>::new()]);
}

#[test]
fn test_label_builds_column_keyed_view() {
    let schema = small_schema();
    let table: Table = vec![row(2000, 1, 10.0), row(2001, 2, 11.0)];
    let labeled = label(&table, &schema);

    assert_eq!(labeled.len, 2);
    let keys: Vec<&String> = labeled.columns.keys().collect();
    assert_eq!(keys, ["yyyy", "mm", "tmax"]);
    assert_eq!(
        labeled.columns["mm"],
        vec![Some(Value::Int(1)), Some(Value::Int(2))]
    );
    assert_eq!(labeled.units["yyyy"], None);
}
