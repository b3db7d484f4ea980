use crate::config::types::{Config, CrawlerConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_visits < 1 {
        return Err(ConfigError::Validation(format!(
            "max-visits must be >= 1, got {}",
            config.max_visits
        )));
    }

    if config.fetch_timeout_seconds < 1 || config.fetch_timeout_seconds > 300 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-seconds must be between 1 and 300, got {}",
            config.fetch_timeout_seconds
        )));
    }

    Ok(())
}
