//! Command implementations for the CSV ingestion CLI
//!
//! Contains the command execution logic: logging setup, file selection,
//! parsing, grouping, and terminal reporting.

use crate::cli::args::{Args, Commands, ParseArgs, SchemaArgs};
use crate::config::SchemaConfig;
use crate::parser::{self, ParseOutcome, Table};
use crate::schema::{Schema, TypeRegistry};
use crate::{Error, Result, cli::input, reader};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Parse(parse_args) => run_parse(parse_args),
        Commands::Schema(schema_args) => run_schema(schema_args),
    }
}

/// Set up structured logging for the parse command
pub fn setup_logging(args: &ParseArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_ingest={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}

/// Execute the parse command
fn run_parse(args: ParseArgs) -> Result<()> {
    args.validate()?;
    setup_logging(&args)?;

    let schema = load_schema(&args)?;
    let path = select_input(&args)?;

    info!("Parsing {} against {} fields", path.display(), schema.field_count());
    let text = reader::read_text(&path)?;
    let outcome = parser::parse(&text, &schema)?;

    report_outcome(&args, &schema, &outcome);

    if let Some(key_column) = args.group_by {
        let (min, max) = args.get_range()?;
        let grouped = parser::group_by_value(outcome.table, &schema, key_column, min, max)?;

        println!(
            "\nGrouped rows by column {} into {} buckets:",
            key_column,
            grouped.buckets.len()
        );
        for (i, bucket) in grouped.buckets.iter().enumerate() {
            println!("  {} = {}: {} rows", key_column, min + i as i64, bucket.len());
        }
        if grouped.rejected > 0 {
            println!(
                "{}",
                format!(
                    "Warning: {} rows were rejected as their values did not fall in the range ({}:{})",
                    grouped.rejected, min, max
                )
                .yellow()
            );
        }
    }

    Ok(())
}

/// Execute the schema command: print a schema description to start from
fn run_schema(args: SchemaArgs) -> Result<()> {
    let config = SchemaConfig::default();
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| Error::configuration(format!("cannot serialize schema: {}", e)))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .map_err(|source| Error::io(path.display().to_string(), source))?;
            println!("Schema description written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn load_schema(args: &ParseArgs) -> Result<Schema> {
    let registry = TypeRegistry::with_builtins();
    let config = match &args.schema {
        Some(path) => SchemaConfig::from_file(path)?,
        None => SchemaConfig::default(),
    };
    config.into_schema(&registry)
}

fn select_input(args: &ParseArgs) -> Result<PathBuf> {
    match (&args.input, &args.data_dir) {
        (Some(input), _) => Ok(input.clone()),
        (None, Some(dir)) => input::choose_file_in_dir(dir),
        // validate() has already rejected this combination
        (None, None) => Err(Error::configuration("no input file selected")),
    }
}

fn report_outcome(args: &ParseArgs, schema: &Schema, outcome: &ParseOutcome) {
    if args.quiet {
        return;
    }

    print!("{}", outcome.stats.report(schema));
    if !outcome.stats.is_clean() {
        println!(
            "{}",
            format!(
                "Warning: {} empty cells and {} unreadable values were nulled",
                outcome.stats.total_nulls(),
                outcome.stats.total_errors()
            )
            .yellow()
        );
    }

    if args.limit > 0 {
        print_preview(&outcome.table, schema, args.limit);
    }
}

fn print_preview(table: &Table, schema: &Schema, limit: usize) {
    println!("\n{}", schema.field_names().join("\t").bold());
    for row in table.iter().take(limit) {
        let rendered: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(value) => value.to_string(),
                None => "-".to_string(),
            })
            .collect();
        println!("{}", rendered.join("\t"));
    }
    if table.len() > limit {
        println!("... ({} rows total)", table.len());
    }
}
