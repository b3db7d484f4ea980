//! Ladle main entry point
//!
//! This is the command-line interface for the Ladle recipe-site crawler.

use anyhow::Context;
use clap::Parser;
use ladle::config::{load_config, Config};
use ladle::crawler::crawl;
use ladle::output::print_report;
use ladle::LadleError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Ladle: a recipe-site crawler
///
/// Ladle starts at a seed recipe page, prints each recipe it extracts, and
/// follows recommended-recipe links until it reaches the visit cap or runs
/// out of pages. Pages that fail to fetch or parse are reported at the end
/// without stopping the crawl.
#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(version)]
#[command(about = "A recipe-site crawler", long_about = None)]
struct Cli {
    /// Seed recipe URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

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

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration, falling back to built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let seed = validate_seed(&cli.seed)?;

    tracing::info!(
        "Starting crawl from {} (max visits: {}, fetch timeout: {}s)",
        seed,
        config.crawler.max_visits,
        config.crawler.fetch_timeout_seconds
    );

    // The crawl itself has no fatal path: it always runs to completion and
    // produces a report, even if every page failed.
    let report = crawl(&config, &seed).await?;
    print_report(&report);

    Ok(())
}

/// Checks that the seed parses as an http(s) URL, returning it untouched
///
/// The crawl compares URLs as raw strings, so the seed is passed through
/// exactly as given rather than re-serialized from the parsed form.
fn validate_seed(seed: &str) -> Result<String, LadleError> {
    let parsed = Url::parse(seed).map_err(|source| LadleError::InvalidSeed {
        url: seed.to_string(),
        source,
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(LadleError::SeedScheme {
            url: seed.to_string(),
        });
    }

    Ok(seed.to_string())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ladle=info,warn"),
            1 => EnvFilter::new("ladle=debug,info"),
            2 => EnvFilter::new("ladle=trace,debug"),
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
