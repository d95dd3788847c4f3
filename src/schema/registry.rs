//! Explicit field type registry
//!
//! Type names referenced from schema descriptions are resolved through a
//! registry value passed into schema construction. There is no global
//! registry; a host that needs extra types builds its own registry and
//! hands it to the builder.

use super::field_type::FieldType;
use crate::{Error, Result};
use indexmap::IndexMap;

/// Mapping from type name to field type
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: IndexMap<String, FieldType>,
}

impl TypeRegistry {
    /// Create a registry containing only the built-in types
    /// (`universal`, `date`, `integer`, `float`)
    pub fn with_builtins() -> Self {
        let mut types = IndexMap::new();
        types.insert("universal".to_string(), FieldType::Universal);
        types.insert("date".to_string(), FieldType::Date);
        types.insert("integer".to_string(), FieldType::Integer);
        types.insert("float".to_string(), FieldType::Float);
        Self { types }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Register a type under a name, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, field_type: FieldType) -> &mut Self {
        self.types.insert(name.into(), field_type);
        self
    }

    /// Look up a type by name
    pub fn get(&self, name: &str) -> Result<&FieldType> {
        self.types.get(name).ok_or_else(|| Error::unknown_type(name))
    }

    /// Registered type names, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(|s| s.as_str())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
