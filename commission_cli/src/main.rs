mod commands;
mod output;
mod xml_output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use commission_lib::{Config, DealStore, SqliteStore};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "commission")]
#[command(about = "Track real-estate deals and what each one nets you after the broker split")]
struct Cli {
    /// Output format: table, json, csv, md, or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// SQLite database path (overrides config and COMMISSION_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a closed deal
    Add(commands::add::AddArgs),
    /// List saved deals, newest first
    List(commands::list::ListArgs),
    /// Delete a deal by id
    Remove(commands::remove::RemoveArgs),
    /// Totals and average rate across all deals
    Summary,
    /// Show the commission breakdown for a deal without saving it
    Preview(commands::preview::PreviewArgs),
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    Ok(match value.to_lowercase().as_str() {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        "xml" => OutputFormat::Xml,
        other => bail!(
            "unknown output format '{}'. Valid formats: table, json, csv, md, xml",
            other
        ),
    })
}

fn open_store(config: &Config) -> Result<DealStore<SqliteStore>> {
    let backend = SqliteStore::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let store = DealStore::load(backend, config.storage_key.as_str());
    tracing::debug!(
        "Loaded {} deals from {} (key {})",
        store.len(),
        config.db_path.display(),
        store.key()
    );
    Ok(store)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("commission=info".parse()?)
                .add_directive("commission_lib=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = parse_format(&cli.output)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    match &cli.command {
        Commands::Add(args) => {
            let mut store = open_store(&config)?;
            commands::add::run(args, &config, &mut store, &format)?
        }
        Commands::List(args) => commands::list::run(args, &open_store(&config)?, &format)?,
        Commands::Remove(args) => {
            let mut store = open_store(&config)?;
            commands::remove::run(args, &mut store)?
        }
        Commands::Summary => commands::summary::run(&open_store(&config)?, &format)?,
        Commands::Preview(args) => commands::preview::run(args, &config, &format)?,
    }

    Ok(())
}
