//! Command-line argument definitions for the CSV ingestion tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::MAX_GROUP_BUCKETS;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CSV ingestion tool
///
/// Parses delimited observation data files against a declarative schema,
/// reporting per-column empty and unreadable cell counts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv_ingest",
    version,
    about = "Schema-driven CSV ingestion with per-column null and error accounting",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a data file against a schema and report cell accounting
    Parse(ParseArgs),
    /// Print a schema description file to start from
    Schema(SchemaArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Input data file to parse
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with = "data_dir",
        help = "Path to the data file to parse"
    )]
    pub input: Option<PathBuf>,

    /// Directory to pick a data file from interactively
    ///
    /// Lists the files in the directory and prompts for a selection by
    /// item number.
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "DIR",
        help = "Directory to pick a data file from interactively"
    )]
    pub data_dir: Option<PathBuf>,

    /// Schema description file (JSON)
    ///
    /// If not specified, the built-in UK monthly historic station schema
    /// is used.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        help = "Schema description file (JSON)"
    )]
    pub schema: Option<PathBuf>,

    /// Bucket parsed rows by an integer key column
    #[arg(
        long = "group-by",
        value_name = "COLUMN",
        help = "Bucket rows by the integer value in this column index"
    )]
    pub group_by: Option<usize>,

    /// Key range for --group-by as min,max (half-open)
    #[arg(
        long = "range",
        value_name = "MIN,MAX",
        requires = "group_by",
        help = "Key range for --group-by, as min,max"
    )]
    pub range: Option<String>,

    /// Number of parsed rows to preview on stdout
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "ROWS",
        default_value_t = 10,
        help = "Number of parsed rows to preview (0 disables the preview)"
    )]
    pub limit: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the schema command
#[derive(Debug, Clone, Parser)]
pub struct SchemaArgs {
    /// Output file for the schema description
    ///
    /// If not specified, prints to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the schema description"
    )]
    pub output: Option<PathBuf>,
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input.is_none() && self.data_dir.is_none() {
            return Err(Error::configuration(
                "either --input or --data-dir must be given".to_string(),
            ));
        }

        if let Some(input) = &self.input {
            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(schema) = &self.schema {
            if !schema.is_file() {
                return Err(Error::configuration(format!(
                    "Schema file does not exist: {}",
                    schema.display()
                )));
            }
        }

        if let Some(range) = &self.range {
            self.parse_range_str(range)?;
        }

        Ok(())
    }

    /// Get the key range for grouping, defaulting to calendar months
    pub fn get_range(&self) -> Result<(i64, i64)> {
        match &self.range {
            Some(range) => self.parse_range_str(range),
            None => Ok((1, 13)),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    fn parse_range_str(&self, range: &str) -> Result<(i64, i64)> {
        let parts: Vec<&str> = range.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::configuration(
                "Range must be in format: min,max".to_string(),
            ));
        }

        let min: i64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid range min: {}", parts[0])))?;
        let max: i64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid range max: {}", parts[1])))?;

        if min >= max {
            return Err(Error::configuration(
                "Range min must be less than max".to_string(),
            ));
        }

        // Overflow-safe span check; extreme ranges are mistyped input
        let span_ok = max
            .checked_sub(min)
            .and_then(|span| usize::try_from(span).ok())
            .is_some_and(|span| span <= MAX_GROUP_BUCKETS);
        if !span_ok {
            return Err(Error::configuration(format!(
                "Range {},{} spans more than {} buckets",
                min, max, MAX_GROUP_BUCKETS
            )));
        }

        Ok((min, max))
    }
}
