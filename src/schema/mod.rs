//! Declarative file shape description
//!
//! A [`Schema`] is the full description of a delimited file's expected
//! shape: the ordered columns (name, type, optional unit), the row and
//! cell delimiter patterns, the empty-cell pattern, marker characters
//! stripped before tokenization, and the row indices where headings,
//! units, and data begin.
//!
//! Schemas are immutable once built and may be shared freely between
//! parse calls; construction goes through [`SchemaBuilder`], which
//! resolves type names against an explicit [`TypeRegistry`] and compiles
//! every configured pattern up front.

pub mod field;
pub mod field_type;
pub mod registry;

#[cfg(test)]
pub mod tests;

pub use field::Field;
pub use field_type::{CustomType, FieldType, Value, ValueKind};
pub use registry::TypeRegistry;

use crate::constants::{DEFAULT_CELL_DELIMITER, DEFAULT_EMPTY_CELL, DEFAULT_ROW_DELIMITER};
use crate::{Error, Result};
use regex::Regex;

/// Immutable description of a delimited file's expected shape
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
    cell_delimiter: Regex,
    row_delimiter: Regex,
    empty_cell: Regex,
    markers: Vec<char>,
    heading_row: Option<usize>,
    unit_row: Option<usize>,
    data_row: usize,
}

impl Schema {
    /// Start building a schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Ordered columns of the schema
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of declared columns; every parsed row is trimmed or padded
    /// to this width
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Ordered field names, as expected in the heading row
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Ordered unit strings, as expected in the unit row (empty string
    /// for fields with no declared unit)
    pub fn field_units(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.unit_str().to_string()).collect()
    }

    /// Pattern splitting a row into cells
    pub fn cell_delimiter(&self) -> &Regex {
        &self.cell_delimiter
    }

    /// Pattern splitting the text into rows
    pub fn row_delimiter(&self) -> &Regex {
        &self.row_delimiter
    }

    /// Pattern marking a cell as intentionally blank
    pub fn empty_cell(&self) -> &Regex {
        &self.empty_cell
    }

    /// Characters stripped from the raw text before tokenization
    pub fn markers(&self) -> &[char] {
        &self.markers
    }

    /// Row index holding the column headings, if the file has one
    pub fn heading_row(&self) -> Option<usize> {
        self.heading_row
    }

    /// Row index holding the column units, if the file has one
    pub fn unit_row(&self) -> Option<usize> {
        self.unit_row
    }

    /// Index of the first data row
    pub fn data_row(&self) -> usize {
        self.data_row
    }
}

/// Builder for [`Schema`]
///
/// Field lists can be given either as comma-space-separated strings (the
/// convention of hand-authored schema descriptions) or as explicit
/// per-field calls. Type names are resolved when [`SchemaBuilder::build`]
/// runs.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    field_specs: Vec<FieldSpec>,
    unit_list: Option<Vec<String>>,
    cell_delimiter: String,
    row_delimiter: String,
    empty_cell: String,
    markers: String,
    heading_row: Option<usize>,
    unit_row: Option<usize>,
    data_row: usize,
}

#[derive(Debug, Clone)]
struct FieldSpec {
    name: String,
    type_name: String,
    unit: Option<String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            field_specs: Vec::new(),
            unit_list: None,
            cell_delimiter: DEFAULT_CELL_DELIMITER.to_string(),
            row_delimiter: DEFAULT_ROW_DELIMITER.to_string(),
            empty_cell: DEFAULT_EMPTY_CELL.to_string(),
            markers: String::new(),
            heading_row: None,
            unit_row: None,
            data_row: 0,
        }
    }

    /// Add one field with a type name resolved at build time
    pub fn field(mut self, name: &str, type_name: &str) -> Self {
        self.field_specs.push(FieldSpec {
            name: name.to_string(),
            type_name: type_name.to_string(),
            unit: None,
        });
        self
    }

    /// Add one field with a unit
    pub fn field_with_unit(mut self, name: &str, type_name: &str, unit: &str) -> Self {
        self.field_specs.push(FieldSpec {
            name: name.to_string(),
            type_name: type_name.to_string(),
            unit: Some(unit.to_string()),
        });
        self
    }

    /// Add fields from parallel comma-space-separated heading and type
    /// lists, e.g. `"yyyy, mm, tmax"` with `"date, integer, float"`
    pub fn fields_from_lists(mut self, headings: &str, type_names: &str) -> Self {
        let names = split_list(headings);
        let types = split_list(type_names);
        for (i, name) in names.iter().enumerate() {
            self.field_specs.push(FieldSpec {
                name: name.clone(),
                // A short type list falls back to the universal type
                type_name: types.get(i).cloned().unwrap_or_else(|| "universal".to_string()),
                unit: None,
            });
        }
        self
    }

    /// Assign units from a comma-space-separated list
    ///
    /// A list as long as the field list is assigned positionally; a
    /// shorter list is assigned to the trailing fields (leading key
    /// columns like year and month typically carry no unit).
    pub fn units_from_list(mut self, units: &str) -> Self {
        self.unit_list = Some(split_list(units));
        self
    }

    /// Pattern splitting a row into cells (default: `,`)
    pub fn cell_delimiter(mut self, pattern: &str) -> Self {
        self.cell_delimiter = pattern.to_string();
        self
    }

    /// Pattern splitting the text into rows (default: `\n`)
    pub fn row_delimiter(mut self, pattern: &str) -> Self {
        self.row_delimiter = pattern.to_string();
        self
    }

    /// Pattern marking a cell as intentionally blank (default: `^$`)
    pub fn empty_cell(mut self, pattern: &str) -> Self {
        self.empty_cell = pattern.to_string();
        self
    }

    /// Characters stripped from the raw text before tokenization
    pub fn markers(mut self, markers: &str) -> Self {
        self.markers = markers.to_string();
        self
    }

    /// Row index of the heading row
    pub fn heading_row(mut self, row: usize) -> Self {
        self.heading_row = Some(row);
        self
    }

    /// Row index of the unit row
    pub fn unit_row(mut self, row: usize) -> Self {
        self.unit_row = Some(row);
        self
    }

    /// Index of the first data row (default: 0)
    pub fn data_row(mut self, row: usize) -> Self {
        self.data_row = row;
        self
    }

    /// Resolve type names and compile patterns into an immutable schema
    pub fn build(mut self, registry: &TypeRegistry) -> Result<Schema> {
        if self.field_specs.is_empty() {
            return Err(Error::configuration("schema declares no fields"));
        }

        if let Some(units) = self.unit_list.take() {
            let count = self.field_specs.len();
            if units.len() > count {
                return Err(Error::configuration(format!(
                    "unit list has {} entries for {} fields",
                    units.len(),
                    count
                )));
            }
            let offset = count - units.len();
            for (i, unit) in units.into_iter().enumerate() {
                self.field_specs[offset + i].unit = Some(unit);
            }
        }

        let mut fields = Vec::with_capacity(self.field_specs.len());
        for spec in &self.field_specs {
            let field_type = registry.get(&spec.type_name)?.clone();
            fields.push(Field {
                name: spec.name.clone(),
                field_type,
                unit: spec.unit.clone(),
            });
        }

        // Heading and unit rows must precede the data section, otherwise
        // the trimmer would hand validated rows back as data
        for (label, row) in [("heading_row", self.heading_row), ("unit_row", self.unit_row)] {
            if let Some(row) = row {
                if row >= self.data_row {
                    return Err(Error::configuration(format!(
                        "{} ({}) must be less than data_row ({})",
                        label, row, self.data_row
                    )));
                }
            }
        }

        Ok(Schema {
            fields,
            cell_delimiter: compile(&self.cell_delimiter)?,
            row_delimiter: compile(&self.row_delimiter)?,
            empty_cell: compile(&self.empty_cell)?,
            markers: self.markers.chars().collect(),
            heading_row: self.heading_row,
            unit_row: self.unit_row,
            data_row: self.data_row,
        })
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Split a comma-space-separated configuration list
fn split_list(list: &str) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }
    list.split(", ").map(|s| s.to_string()).collect()
}
