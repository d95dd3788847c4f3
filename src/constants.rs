//! Application constants for the CSV ingestion tool
//!
//! This module contains the built-in delimiter patterns, marker characters,
//! and the default schema lists used when no schema file is provided.

// =============================================================================
// Delimiter and Pattern Defaults
// =============================================================================

/// Default cell delimiter pattern (a literal comma)
pub const DEFAULT_CELL_DELIMITER: &str = ",";

/// Default row delimiter pattern (a newline)
pub const DEFAULT_ROW_DELIMITER: &str = "\n";

/// Default empty-cell pattern: only a fully empty cell counts as
/// intentionally blank
pub const DEFAULT_EMPTY_CELL: &str = "^$";

/// Formatting annotation characters stripped from raw text before
/// tokenization (provisional/estimated value markers in Met Office
/// historic station files)
pub const DEFAULT_MARKERS: &str = "*#";

// =============================================================================
// Built-in Field Type Patterns
// =============================================================================

/// Date type: exactly four numeric digits (a year column)
pub const DATE_PATTERN: &str = r"^[0-9]{4}$";

/// Integer type: optional leading minus, one or more digits.
/// The empty string is never a valid integer; it falls through to the
/// empty-cell accounting instead.
pub const INTEGER_PATTERN: &str = r"^-?[0-9]+$";

/// Float type: optional leading minus, one or more digits, optional
/// decimal point with trailing digits
pub const FLOAT_PATTERN: &str = r"^-?[0-9]+\.?[0-9]*$";

// =============================================================================
// Built-in Type Names
// =============================================================================

/// Names of the built-in field types, as referenced from schema files
pub const BUILTIN_TYPE_NAMES: &[&str] = &["universal", "date", "integer", "float"];

// =============================================================================
// Default Schema (UK monthly historic station data)
// =============================================================================

/// Default column headings, comma-space separated
pub const DEFAULT_HEADINGS: &str = "yyyy, mm, tmax, tmin, af, rain, sun";

/// Default column units for the measurement columns, comma-space separated
pub const DEFAULT_UNITS: &str = "degC, degC, days, mm, hours";

/// Default per-column type names, parallel to [`DEFAULT_HEADINGS`]
pub const DEFAULT_TYPES: &str = "date, integer, float, float, integer, float, float";

// =============================================================================
// Grouping Limits
// =============================================================================

/// Maximum number of buckets a grouping range may span; keys are years,
/// months, or similar small ordinals, so anything wider is a mistyped
/// range rather than a real request
pub const MAX_GROUP_BUCKETS: usize = 100_000;

// =============================================================================
// Interactive Prompt Configuration
// =============================================================================

/// Maximum attempts before the interactive file picker gives up
pub const MAX_PROMPT_ATTEMPTS: usize = 5;
