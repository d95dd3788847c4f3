//! Tests for schema construction and validation

use super::station_schema;
use crate::Error;
use crate::schema::{SchemaBuilder, TypeRegistry};

#[test]
fn test_station_schema_shape() {
    let schema = station_schema();

    assert_eq!(schema.field_count(), 7);
    assert_eq!(
        schema.field_names(),
        vec!["yyyy", "mm", "tmax", "tmin", "af", "rain", "sun"]
    );
    assert_eq!(schema.markers(), &['*', '#']);
    assert_eq!(schema.heading_row(), Some(0));
    assert_eq!(schema.unit_row(), None);
    assert_eq!(schema.data_row(), 1);
}

#[test]
fn test_short_unit_list_assigns_trailing_fields() {
    let schema = station_schema();

    // yyyy and mm carry no unit; the five units cover tmax..sun
    assert_eq!(
        schema.field_units(),
        vec!["", "", "degC", "degC", "days", "mm", "hours"]
    );
}

#[test]
fn test_surplus_units_rejected() {
    let registry = TypeRegistry::with_builtins();
    let err = SchemaBuilder::new()
        .fields_from_lists("a, b", "integer, integer")
        .units_from_list("one, two, three")
        .build(&registry)
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_column_count_derived_from_fields() {
    let registry = TypeRegistry::with_builtins();
    let schema = SchemaBuilder::new()
        .field("id", "integer")
        .field_with_unit("temp", "float", "degC")
        .build(&registry)
        .unwrap();

    assert_eq!(schema.field_count(), 2);
    assert_eq!(schema.fields()[1].unit.as_deref(), Some("degC"));
}

#[test]
fn test_short_type_list_falls_back_to_universal() {
    let registry = TypeRegistry::with_builtins();
    let schema = SchemaBuilder::new()
        .fields_from_lists("a, b, c", "integer")
        .build(&registry)
        .unwrap();

    assert_eq!(schema.fields()[0].field_type.name(), "integer");
    assert_eq!(schema.fields()[1].field_type.name(), "universal");
    assert_eq!(schema.fields()[2].field_type.name(), "universal");
}

#[test]
fn test_empty_schema_rejected() {
    let registry = TypeRegistry::with_builtins();
    let err = SchemaBuilder::new().build(&registry).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_unknown_type_name_rejected() {
    let registry = TypeRegistry::with_builtins();
    let err = SchemaBuilder::new()
        .field("x", "decimal")
        .build(&registry)
        .unwrap_err();

    assert!(matches!(err, Error::UnknownType { name } if name == "decimal"));
}

#[test]
fn test_heading_row_must_precede_data_row() {
    let registry = TypeRegistry::with_builtins();

    let err = SchemaBuilder::new()
        .field("x", "integer")
        .heading_row(2)
        .data_row(1)
        .build(&registry)
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    // Equal is also invalid: the heading row would be consumed as data
    let err = SchemaBuilder::new()
        .field("x", "integer")
        .unit_row(0)
        .data_row(0)
        .build(&registry)
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_invalid_delimiter_pattern_rejected() {
    let registry = TypeRegistry::with_builtins();
    let err = SchemaBuilder::new()
        .field("x", "integer")
        .cell_delimiter("[unclosed")
        .build(&registry)
        .unwrap_err();

    match err {
        Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
        other => panic!("expected invalid pattern error, got {:?}", other),
    }
}

#[test]
fn test_custom_delimiters() {
    let registry = TypeRegistry::with_builtins();
    let schema = SchemaBuilder::new()
        .fields_from_lists("a, b", "integer, integer")
        .cell_delimiter(r"\t")
        .row_delimiter(";")
        .empty_cell("^(---)?$")
        .build(&registry)
        .unwrap();

    assert!(schema.cell_delimiter().is_match("\t"));
    assert!(schema.empty_cell().is_match("---"));
    assert!(schema.empty_cell().is_match(""));
    assert!(!schema.empty_cell().is_match("--"));
}
