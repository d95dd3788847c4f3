//! Field type definitions and cell value conversion
//!
//! A field type pairs a matching pattern with a conversion. The pattern
//! decides whether a raw cell belongs to the column at all; the
//! conversion turns a matching cell into a typed value. Conversion
//! failure after a successful pattern match (e.g. integer overflow) is
//! a distinct, reportable error rather than a silent null.

use crate::constants::{DATE_PATTERN, FLOAT_PATTERN, INTEGER_PATTERN};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(DATE_PATTERN).unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(INTEGER_PATTERN).unwrap());
static FLOAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(FLOAT_PATTERN).unwrap());

/// A typed cell value produced by a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Extract the integer value, if this is an integer cell
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract the float value, if this is a float cell
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract the text value, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Target representation for custom field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    Text,
}

/// A user-registered field type: a name, an optional matching pattern,
/// and the value kind matching cells convert to
///
/// A `None` pattern matches any string, like the universal type.
#[derive(Debug, Clone)]
pub struct CustomType {
    pub name: Arc<str>,
    pub pattern: Option<Regex>,
    pub kind: ValueKind,
}

/// A column type rule: a matching pattern plus a conversion
///
/// The built-in variants cover the common cases; [`FieldType::Custom`]
/// is the escape hatch for user-registered types.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// Matches any string, identity conversion to text
    Universal,
    /// Exactly four digits, converted to an integer
    Date,
    /// Optional minus sign and one or more digits, converted to an integer
    Integer,
    /// Optional minus sign, digits, optional fractional part, converted
    /// to a float
    Float,
    /// User-registered type
    Custom(CustomType),
}

impl FieldType {
    /// Create a custom type from a pattern string
    ///
    /// A pattern of `None` produces a match-anything type.
    pub fn custom(name: &str, pattern: Option<&str>, kind: ValueKind) -> Result<Self> {
        let compiled = match pattern {
            Some(p) => Some(Regex::new(p).map_err(|source| Error::InvalidPattern {
                pattern: p.to_string(),
                source,
            })?),
            None => None,
        };
        Ok(FieldType::Custom(CustomType {
            name: Arc::from(name),
            pattern: compiled,
            kind,
        }))
    }

    /// Name of this type, as used in schema files and error messages
    pub fn name(&self) -> &str {
        match self {
            FieldType::Universal => "universal",
            FieldType::Date => "date",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Custom(custom) => &custom.name,
        }
    }

    /// Check whether a raw cell matches this type's pattern
    ///
    /// Types without a pattern (universal, patternless customs) match
    /// every string.
    pub fn check(&self, raw: &str) -> bool {
        match self {
            FieldType::Universal => true,
            FieldType::Date => DATE_RE.is_match(raw),
            FieldType::Integer => INTEGER_RE.is_match(raw),
            FieldType::Float => FLOAT_RE.is_match(raw),
            FieldType::Custom(custom) => match &custom.pattern {
                Some(re) => re.is_match(raw),
                None => true,
            },
        }
    }

    /// Convert a raw cell to this type's value
    ///
    /// Fails with [`Error::Conversion`] if the cell does not match the
    /// pattern, or if the pattern matched but the numeric parse failed
    /// (for example an integer too large for `i64`).
    pub fn convert(&self, raw: &str) -> Result<Value> {
        if !self.check(raw) {
            return Err(Error::conversion(
                raw,
                self.name(),
                "value does not match the type pattern",
            ));
        }

        match self {
            FieldType::Universal => Ok(Value::Text(raw.to_string())),
            FieldType::Date | FieldType::Integer => self.parse_int(raw),
            FieldType::Float => self.parse_float(raw),
            FieldType::Custom(custom) => match custom.kind {
                ValueKind::Int => self.parse_int(raw),
                ValueKind::Float => self.parse_float(raw),
                ValueKind::Text => Ok(Value::Text(raw.to_string())),
            },
        }
    }

    fn parse_int(&self, raw: &str) -> Result<Value> {
        raw.parse::<i64>()
            .map(Value::Int)
            .map_err(|e| Error::conversion(raw, self.name(), e.to_string()))
    }

    fn parse_float(&self, raw: &str) -> Result<Value> {
        raw.parse::<f64>()
            .map(Value::Float)
            .map_err(|e| Error::conversion(raw, self.name(), e.to_string()))
    }
}
