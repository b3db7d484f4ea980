use serde::Deserialize;

/// Main configuration structure for Ladle
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages dispatched to the extractor, counting both
    /// successes and failures (default: 10)
    #[serde(rename = "max-visits", default = "default_max_visits")]
    pub max_visits: usize,

    /// Per-request timeout for page fetches, in seconds (default: 5)
    #[serde(rename = "fetch-timeout-seconds", default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_visits: default_max_visits(),
            fetch_timeout_seconds: default_fetch_timeout(),
        }
    }
}

fn default_max_visits() -> usize {
    10
}

fn default_fetch_timeout() -> u64 {
    5
}
