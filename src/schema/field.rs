//! Column metadata: name, type, and optional unit

use super::field_type::FieldType;

/// One column of the declared schema
///
/// Immutable after schema construction; the column count of a parsed
/// table is derived from the number of fields, never configured
/// separately.
#[derive(Debug, Clone)]
pub struct Field {
    /// Column heading, matched against the heading row when one is declared
    pub name: String,

    /// Type rule applied to every data cell in this column
    pub field_type: FieldType,

    /// Measurement unit, matched against the unit row when one is declared
    pub unit: Option<String>,
}

impl Field {
    /// Create a field with no unit
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            unit: None,
        }
    }

    /// Create a field with a unit
    pub fn with_unit(name: impl Into<String>, field_type: FieldType, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            unit: Some(unit.into()),
        }
    }

    /// Unit string as validated against the unit row (empty when undeclared)
    pub fn unit_str(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}
