//! Crawler module for page fetching and crawl control
//!
//! This module contains:
//! - HTTP client construction and page fetching
//! - The crawl session that manages the frontier, visited set, visit cap,
//!   and per-page failure handling

mod fetcher;
mod session;

pub use fetcher::{build_http_client, fetch_page};
pub use session::{CrawlReport, CrawlSession};

use crate::config::Config;
use crate::extract::SiteExtractor;

/// Runs a complete crawl from the seed URL with the production extractor
///
/// This is the main entry point for a crawl. It builds the HTTP-backed
/// extractor, drives the session until the visit cap or frontier exhaustion,
/// and returns the report for printing. Individual page failures never abort
/// the crawl.
///
/// # Example
///
/// ```no_run
/// use ladle::config::Config;
/// use ladle::crawler::crawl;
///
/// # async fn example() -> ladle::Result<()> {
/// let config = Config::default();
/// let report = crawl(&config, "https://www.example-recipes.com/recipes/lemon-tart-123").await?;
/// println!("visited {} pages", report.visited.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed: &str) -> crate::Result<CrawlReport> {
    let extractor = SiteExtractor::new(&config.crawler)?;
    let session = CrawlSession::new(extractor, config.crawler.max_visits);
    Ok(session.run(seed).await)
}
