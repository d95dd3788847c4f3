//! Schema description files
//!
//! Schemas are authored as JSON documents and deserialized into a
//! [`SchemaConfig`], which resolves into an immutable [`Schema`] through
//! a [`TypeRegistry`]. A missing schema file is not required for the
//! common case: [`SchemaConfig::default`] describes the UK monthly
//! historic station dataset the tool was originally built around.
//!
//! ```json
//! {
//!   "cell_delimiter": ",",
//!   "row_delimiter": "\n",
//!   "empty_cell": "^$",
//!   "markers": "*#",
//!   "heading_row": 0,
//!   "data_row": 1,
//!   "fields": [
//!     { "name": "yyyy", "type": "date" },
//!     { "name": "tmax", "type": "float", "unit": "degC" }
//!   ]
//! }
//! ```

use crate::constants::{
    DEFAULT_CELL_DELIMITER, DEFAULT_EMPTY_CELL, DEFAULT_HEADINGS, DEFAULT_MARKERS,
    DEFAULT_ROW_DELIMITER, DEFAULT_TYPES, DEFAULT_UNITS,
};
use crate::schema::{Schema, SchemaBuilder, TypeRegistry};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One field entry in a schema description file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Column heading
    pub name: String,

    /// Registered type name (`universal`, `date`, `integer`, `float`,
    /// or a host-registered custom type)
    #[serde(rename = "type", default = "default_type_name")]
    pub type_name: String,

    /// Measurement unit, if the file declares a unit row
    #[serde(default)]
    pub unit: Option<String>,
}

fn default_type_name() -> String {
    "universal".to_string()
}

/// Deserialized schema description, prior to pattern compilation and
/// type resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default = "default_cell_delimiter")]
    pub cell_delimiter: String,

    #[serde(default = "default_row_delimiter")]
    pub row_delimiter: String,

    #[serde(default = "default_empty_cell")]
    pub empty_cell: String,

    /// Characters stripped from the raw text before tokenization
    #[serde(default)]
    pub markers: String,

    #[serde(default)]
    pub heading_row: Option<usize>,

    #[serde(default)]
    pub unit_row: Option<usize>,

    #[serde(default)]
    pub data_row: usize,

    pub fields: Vec<FieldConfig>,
}

fn default_cell_delimiter() -> String {
    DEFAULT_CELL_DELIMITER.to_string()
}

fn default_row_delimiter() -> String {
    DEFAULT_ROW_DELIMITER.to_string()
}

fn default_empty_cell() -> String {
    DEFAULT_EMPTY_CELL.to_string()
}

impl SchemaConfig {
    /// Load a schema description from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::io(path.display().to_string(), source))?;
        Self::from_json(&text)
    }

    /// Parse a schema description from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SchemaConfig = serde_json::from_str(text)
            .map_err(|e| Error::configuration(format!("invalid schema description: {}", e)))?;
        debug!("Loaded schema description with {} fields", config.fields.len());
        Ok(config)
    }

    /// Resolve this description into an immutable schema
    pub fn into_schema(self, registry: &TypeRegistry) -> Result<Schema> {
        let mut builder = SchemaBuilder::new()
            .cell_delimiter(&self.cell_delimiter)
            .row_delimiter(&self.row_delimiter)
            .empty_cell(&self.empty_cell)
            .markers(&self.markers)
            .data_row(self.data_row);

        if let Some(row) = self.heading_row {
            builder = builder.heading_row(row);
        }
        if let Some(row) = self.unit_row {
            builder = builder.unit_row(row);
        }

        for field in &self.fields {
            builder = match &field.unit {
                Some(unit) => builder.field_with_unit(&field.name, &field.type_name, unit),
                None => builder.field(&field.name, &field.type_name),
            };
        }

        builder.build(registry)
    }
}

impl Default for SchemaConfig {
    /// Description of the UK monthly historic station dataset: a heading
    /// row, year/month key columns, and five measurement columns with
    /// provisional-value markers to strip
    fn default() -> Self {
        let names: Vec<&str> = DEFAULT_HEADINGS.split(", ").collect();
        let types: Vec<&str> = DEFAULT_TYPES.split(", ").collect();
        let units: Vec<&str> = DEFAULT_UNITS.split(", ").collect();
        let unit_offset = names.len() - units.len();

        let fields = names
            .iter()
            .enumerate()
            .map(|(i, name)| FieldConfig {
                name: name.to_string(),
                type_name: types[i].to_string(),
                unit: i.checked_sub(unit_offset).map(|u| units[u].to_string()),
            })
            .collect();

        Self {
            cell_delimiter: default_cell_delimiter(),
            row_delimiter: default_row_delimiter(),
            empty_cell: default_empty_cell(),
            markers: DEFAULT_MARKERS.to_string(),
            heading_row: Some(0),
            unit_row: None,
            data_row: 1,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let registry = TypeRegistry::with_builtins();
        let schema = SchemaConfig::default().into_schema(&registry).unwrap();

        assert_eq!(schema.field_count(), 7);
        assert_eq!(schema.heading_row(), Some(0));
        assert_eq!(schema.data_row(), 1);
        assert_eq!(schema.fields()[2].unit.as_deref(), Some("degC"));
        assert_eq!(schema.fields()[0].unit, None);
    }

    #[test]
    fn test_minimal_json_defaults() {
        let config = SchemaConfig::from_json(
            r#"{ "fields": [ { "name": "id" }, { "name": "count", "type": "integer" } ] }"#,
        )
        .unwrap();

        assert_eq!(config.cell_delimiter, ",");
        assert_eq!(config.data_row, 0);
        assert_eq!(config.fields[0].type_name, "universal");

        let registry = TypeRegistry::with_builtins();
        let schema = config.into_schema(&registry).unwrap();
        assert_eq!(schema.field_count(), 2);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let config = SchemaConfig::from_json(
            r#"{ "fields": [ { "name": "x", "type": "quaternion" } ] }"#,
        )
        .unwrap();

        let registry = TypeRegistry::with_builtins();
        let err = config.into_schema(&registry).unwrap_err();
        assert!(matches!(err, Error::UnknownType { name } if name == "quaternion"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(SchemaConfig::from_json("{ not json").is_err());
        assert!(SchemaConfig::from_json(r#"{ "fields": "nope" }"#).is_err());
    }
}
