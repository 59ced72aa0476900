//! Listing-Relay main entry point
//!
//! Command-line interface for the listing crawler: run the HTTP surface,
//! perform a one-shot crawl, or reconcile previously saved files.

use clap::{Parser, Subcommand};
use listing_relay::config::load_config;
use listing_relay::crawler::Coordinator;
use listing_relay::reconcile::reconcile;
use listing_relay::server::run_server;
use listing_relay::url::ListingPattern;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Listing-Relay: a single-site listing crawler with webhook delivery
#[derive(Parser, Debug)]
#[command(name = "listing-relay")]
#[command(version)]
#[command(about = "Crawl a listing site and relay extracted pages", long_about = None)]
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
    /// Run the HTTP surface and wait for scrape requests
    Serve,

    /// Crawl once from the given seed URL and exit
    Crawl {
        /// Seed URL to start the traversal from
        seed: String,

        /// Run a reconciliation pass after the crawl completes
        #[arg(long)]
        reconcile: bool,
    },

    /// Reconcile the saved inventory against the processed-link store
    Reconcile {
        /// Seed URL the inventory was crawled from
        seed: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)?;

    match cli.command {
        Command::Serve => {
            run_server(config).await?;
        }
        Command::Crawl {
            seed,
            reconcile: run_reconcile,
        } => {
            let seed = parse_seed(&seed)?;
            let mut coordinator = Coordinator::new(&config)?;
            let inventory = coordinator.run(&seed).await?;
            tracing::info!("Inventory holds {} links", inventory.len());

            if run_reconcile {
                let pattern = ListingPattern::new(&seed);
                reconcile(
                    Path::new(&config.storage.inventory_path),
                    &pattern,
                    coordinator.processed().links(),
                    Path::new(&config.storage.missing_links_path),
                );
            }
        }
        Command::Reconcile { seed } => {
            let seed = parse_seed(&seed)?;
            let pattern = ListingPattern::new(&seed);
            let processed =
                listing_relay::storage::ProcessedStore::load(&config.storage.processed_links_path);
            let missing = reconcile(
                Path::new(&config.storage.inventory_path),
                &pattern,
                processed.links(),
                Path::new(&config.storage.missing_links_path),
            );
            tracing::info!("{} listing links missing from the processed store", missing.len());
        }
    }

    Ok(())
}

/// Parses and validates a seed URL argument
fn parse_seed(seed: &str) -> anyhow::Result<Url> {
    if !seed.starts_with("http") {
        anyhow::bail!("Seed URL must begin with http:// or https://, got '{}'", seed);
    }
    Ok(Url::parse(seed)?)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listing_relay=info,warn"),
            1 => EnvFilter::new("listing_relay=debug,info"),
            2 => EnvFilter::new("listing_relay=trace,debug"),
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
