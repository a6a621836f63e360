//! SchemaStore - demo client
//!
//! Runs the ninjas walkthrough against a store and prints each result.

use std::env;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use schemastore::format::{format_rows, OutputFormat};
use schemastore::{row, ColumnType, Location, SchemaStore, StoreConfig, Target};

const TABLE: &str = "ninjas";

struct Options {
    config: StoreConfig,
    format: OutputFormat,
}

fn print_usage() {
    println!("Usage: schemastore-demo [LOCATION] [--config FILE] [--format table|json]");
    println!();
    println!("  LOCATION       database file, or :memory: (default)");
    println!("  --config FILE  load store settings from a JSON file");
    println!("  --format NAME  print results as a table (default) or as JSON");
}

/// Build the demo options from command line arguments
fn parse_args(args: &[String]) -> anyhow::Result<Option<Options>> {
    let mut config = StoreConfig::in_memory();
    let mut format = OutputFormat::default();
    let mut location = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => {
                let path = args.get(i + 1).context("--config needs a file path")?;
                config = StoreConfig::from_file(path)
                    .with_context(|| format!("failed to load config from {}", path))?;
                i += 1;
            }
            "--format" | "-f" => {
                let name = args.get(i + 1).context("--format needs a name")?;
                format = OutputFormat::from_name(name)
                    .with_context(|| format!("unknown format: {}", name))?;
                i += 1;
            }
            arg if arg.starts_with('-') => bail!("unknown option: {}", arg),
            arg => location = Some(Location::from(arg.to_string())),
        }
        i += 1;
    }

    if let Some(location) = location {
        config.location = location;
    }

    Ok(Some(Options { config, format }))
}

/// Print every row of the demo table
fn show(store: &SchemaStore, format: OutputFormat, target: Option<Target>) -> anyhow::Result<()> {
    let columns: Vec<String> = store
        .schema(TABLE)?
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();
    let rows = store.select(TABLE, None, target)?;
    print!("{}", format_rows(format, &columns, &rows)?);
    Ok(())
}

fn run(options: Options) -> anyhow::Result<()> {
    let Options { config, format } = options;
    let location = config.location.clone();

    let mut store = SchemaStore::with_config(config);
    let mut db = store
        .open()
        .with_context(|| format!("failed to open {}", location))?;
    println!("Connected to {}", location);

    db.create(
        TABLE,
        [("ninja", ColumnType::Text), ("bitecoins", ColumnType::Integer)],
        "ninja",
    )?;
    let inserted = db.insert(TABLE, vec![row!["taspotts", 906], row!["Tomade", 896]])?;
    println!("\n{} row(s) inserted", inserted);
    show(&db, format, None)?;

    println!("\nninja = 'taspotts'");
    show(&db, format, Some(Target::equals("ninja", "taspotts")))?;

    let updated = db.update(TABLE, ("bitecoins", 1000), ("ninja", "taspotts"))?;
    println!("\n{} row(s) updated", updated);
    show(&db, format, None)?;

    let deleted = db.delete(TABLE, ("ninja", "Tomade"))?;
    println!("\n{} row(s) deleted", deleted);
    show(&db, format, None)?;

    println!("\n{} change(s) in this session", db.num_transactions()?);
    db.close()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    match parse_args(&args)? {
        Some(options) => run(options),
        None => {
            print_usage();
            Ok(())
        }
    }
}
