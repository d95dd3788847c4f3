//! CSV Ingest Library
//!
//! A Rust library for schema-driven ingestion of delimited text files
//! into typed, tabular in-memory structures.
//!
//! This library provides tools for:
//! - Declaring the expected shape of a file (headings, units, per-column
//!   types, delimiters) as an immutable [`Schema`]
//! - Tokenizing raw text into a grid of cells with configurable row and
//!   cell delimiters
//! - Verifying heading and unit rows against the declared schema
//! - Per-cell type checking and conversion with null and error accounting
//! - Bucketing parsed rows by an integer key column and transposing
//!   tables for column-oriented analysis
//!
//! A single bad cell never discards the rest of the file: type failures
//! are recovered into nulls and tallied per column, while structural
//! mismatches (wrong headings or units) abort the parse outright.

pub mod config;
pub mod constants;
pub mod reader;
pub mod schema;

// Parsing pipeline stages
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use parser::{Cell, ColumnStats, ParseOutcome, Row, Table, parse};
pub use schema::{Field, FieldType, Schema, SchemaBuilder, TypeRegistry, Value};

/// Result type alias for CSV ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CSV ingestion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// File could not be opened or read
    #[error("Cannot open file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data directory could not be listed
    #[error("Cannot read data directory '{path}': {source}")]
    NoDataDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data directory contains no files
    #[error("No data files found in directory '{path}'")]
    NoDataFile { path: String },

    /// Heading row does not match the schema's field names
    #[error("Wrong data headings: expected {expected:?}, found {actual:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Unit row does not match the schema's declared units
    #[error("Wrong data units: expected {expected:?}, found {actual:?}")]
    UnitMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// A referenced type name is not registered
    #[error("Unknown field type '{name}'")]
    UnknownType { name: String },

    /// A configured delimiter or cell pattern is not a valid regex
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A cell value could not be converted to its column's type
    #[error("Cannot convert '{value}' to type '{type_name}': {reason}")]
    Conversion {
        value: String,
        type_name: String,
        reason: String,
    },

    /// Schema or CLI configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Interactive input error
    #[error("Input error: {message}")]
    Input { message: String },
}

impl Error {
    /// Create an I/O error with the offending path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a conversion error
    pub fn conversion(
        value: impl Into<String>,
        type_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Conversion {
            value: value.into(),
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Create an interactive input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}
