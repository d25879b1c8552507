//! Driftnet main entry point
//!
//! Command-line interface for the driftnet feed search scraper.

use clap::Parser;
use driftnet::config::{load_config_with_hash, Config};
use driftnet::engine::{Query, Scraper};
use driftnet::output::{ConsoleSink, JsonlSink, PostSink};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Driftnet: a streaming feed search scraper
///
/// Driftnet scrapes posts matching a search query from a social feed by
/// walking its internal AJAX pagination contract, printing each post as it
/// arrives and optionally writing them to a JSON Lines file.
#[derive(Parser, Debug)]
#[command(name = "driftnet")]
#[command(version = "1.0.0")]
#[command(about = "A streaming feed search scraper", long_about = None)]
struct Cli {
    /// Search query to scrape
    #[arg(value_name = "QUERY")]
    query: String,

    /// Path to TOML configuration file (defaults target the live service)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write posts as JSON Lines to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Stop after this many posts
    #[arg(short = 'n', long, value_name = "COUNT")]
    limit: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let query = Query::new(&cli.query)?;
    let scraper = Scraper::new(query, config)?;
    let mut stream = scraper.start().await?;

    let mut console = ConsoleSink::new();
    let mut jsonl = match &cli.output {
        Some(path) => Some(JsonlSink::new(path)?),
        None => None,
    };

    let mut received: u64 = 0;
    while let Some(post) = stream.recv().await {
        console.write(&post)?;
        if let Some(sink) = jsonl.as_mut() {
            sink.write(&post)?;
        }
        received += 1;

        if let Some(limit) = cli.limit {
            if received >= limit {
                tracing::info!("Reached limit of {} posts", limit);
                break;
            }
        }
    }

    // Dropping the stream past this point reaps the paging task
    console.finish()?;
    if let Some(mut sink) = jsonl {
        sink.finish()?;
    }
    tracing::info!("Done after {} posts", received);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("driftnet=info,warn"),
            1 => EnvFilter::new("driftnet=debug,info"),
            2 => EnvFilter::new("driftnet=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
