//! Shelf-Harvest main entry point
//!
//! This is the command-line interface for the Shelf-Harvest catalog harvester.

use clap::{Parser, Subcommand};
use shelf_harvest::config::{load_config_with_hash, Config};
use shelf_harvest::trigger::{run_processing, run_scraper, TriggerContext, TriggerResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shelf-Harvest: a paginated catalog harvester
///
/// Shelf-Harvest crawls a paginated book catalog into a raw CSV file and
/// cleans raw files into a typed, validated dataset.
#[derive(Parser, Debug)]
#[command(name = "shelf-harvest")]
#[command(version)]
#[command(about = "A paginated catalog harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the catalog registered under SOURCE_ID and write its raw records
    Crawl {
        #[arg(value_name = "SOURCE_ID")]
        source_id: String,
    },

    /// Clean the raw data file registered under RAW_DATA_ID
    Process {
        #[arg(value_name = "RAW_DATA_ID")]
        raw_data_id: String,
    },

    /// Validate the config and show what would run
    Check,

    /// Print statistics for a cleaned dataset
    Inspect {
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let ctx = TriggerContext::from_config(&config);

    match cli.command {
        Command::Crawl { source_id } => {
            let result = run_scraper(ctx, &source_id).await;
            report(&result)?;
        }
        Command::Process { raw_data_id } => {
            let result = run_processing(ctx, &raw_data_id);
            report(&result)?;
        }
        Command::Check => handle_check(&config),
        Command::Inspect { dataset } => handle_inspect(&dataset)?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelf_harvest=info,warn"),
            1 => EnvFilter::new("shelf_harvest=debug,info"),
            2 => EnvFilter::new("shelf_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a trigger result as JSON and exits non-zero on failure
fn report(result: &TriggerResult) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(result)?);

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

/// Handles `check`: shows what the config would run
fn handle_check(config: &Config) {
    println!("=== Shelf-Harvest Config Check ===\n");

    println!("Scraper Configuration:");
    println!("  Max retries: {}", config.scraper.max_retries);
    println!("  Request timeout: {}s", config.scraper.request_timeout);
    println!("  Retry backoff: {}ms", config.scraper.retry_backoff);
    match config.scraper.max_pages {
        Some(max) => println!("  Max pages: {}", max),
        None => println!("  Max pages: unbounded"),
    }
    println!("  Catalog segment: {}", config.scraper.catalog_segment);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Raw data: {}", config.output.raw_data_dir);
    println!("  Processed data: {}", config.output.processed_data_dir);

    println!("\nSources ({}):", config.sources.len());
    for source in &config.sources {
        println!("  - {} -> {}", source.id, source.url);
    }

    println!("\nRaw Data Files ({}):", config.raw_data.len());
    for entry in &config.raw_data {
        println!("  - {} -> {}", entry.id, entry.path);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles `inspect`: prints statistics for a cleaned dataset
fn handle_inspect(dataset: &std::path::Path) -> anyhow::Result<()> {
    use anyhow::Context;
    use shelf_harvest::output::{print_dataset_statistics, DatasetStatistics};
    use shelf_harvest::storage::load_dataset;

    println!("Dataset: {}\n", dataset.display());

    let records = load_dataset(dataset)
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;
    let stats = DatasetStatistics::from_records(&records);
    print_dataset_statistics(&stats);

    Ok(())
}
