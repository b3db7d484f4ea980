//! Ladle: a recipe-site crawler
//!
//! This crate crawls a recipe website starting from a seed page, extracts
//! structured recipe data from each page, and follows "recommended recipe"
//! links to discover further pages, up to a visit cap.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;

use thiserror::Error;

/// Main error type for Ladle operations
///
/// These are the only fatal paths, and all of them occur before the crawl
/// loop starts. Once crawling, extraction failures are recorded per page and
/// never abort the run.
#[derive(Debug, Error)]
pub enum LadleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        source: url::ParseError,
    },

    #[error("Seed URL '{url}' must use the http or https scheme")]
    SeedScheme { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Ladle operations
pub type Result<T> = std::result::Result<T, LadleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, CrawlSession};
pub use extract::{Extract, ExtractError, Extraction, Recipe, SiteExtractor};
