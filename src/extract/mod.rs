//! Page extraction: fetching a recipe page and scraping its fields
//!
//! The crawl loop depends only on the [`Extract`] trait; [`SiteExtractor`] is
//! the production implementation that fetches over HTTP and parses the site's
//! markup. Fetch-side and parse-side failures collapse into one error type
//! because the crawl loop never branches on the cause, only on success or
//! failure.

mod parser;
mod recipe;

pub use parser::parse_recipe;
pub use recipe::Recipe;

use crate::config::CrawlerConfig;
use crate::crawler::{build_http_client, fetch_page};
use crate::output::print_recipe;
use reqwest::Client;
use thiserror::Error;

/// Errors from a single extraction attempt
///
/// Only these tagged variants count as expected extraction failure; anything
/// else a future implementation might hit is a bug and should not be folded
/// in here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("request for {url} failed: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("page at {url} is missing its {region} block")]
    MissingRegion { url: String, region: &'static str },
}

/// A successfully extracted page: the structured record plus its outbound
/// recommendation links (deduplicated, first occurrence wins)
#[derive(Debug, Clone)]
pub struct Extraction {
    pub recipe: Recipe,
    pub links: Vec<String>,
}

/// Parses one page into a structured record and discovered links
#[async_trait::async_trait]
pub trait Extract {
    async fn extract(&self, url: &str) -> Result<Extraction, ExtractError>;
}

/// Production extractor: HTTP fetch plus site-markup parsing
pub struct SiteExtractor {
    client: Client,
}

impl SiteExtractor {
    /// Creates an extractor whose requests time out per the configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config.fetch_timeout_seconds)?,
        })
    }
}

#[async_trait::async_trait]
impl Extract for SiteExtractor {
    async fn extract(&self, url: &str) -> Result<Extraction, ExtractError> {
        tracing::debug!("fetching {}", url);
        let body = fetch_page(&self.client, url).await?;
        let (recipe, links) = parse_recipe(&body, url)?;

        tracing::debug!("extracted '{}' with {} links", recipe.title, links.len());

        // Each record is rendered for the reader as its page completes; the
        // crawl loop itself never looks inside the record.
        print_recipe(&recipe);

        Ok(Extraction { recipe, links })
    }
}
