//! HTTP fetcher implementation
//!
//! Builds the shared HTTP client and performs the GET request for each
//! candidate page. Non-2xx responses and transport errors (including the
//! per-request timeout) all surface as [`ExtractError`] so the crawl loop
//! records the page and moves on.

use crate::extract::ExtractError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared across all page fetches
///
/// The timeout bounds every request, so a single unreachable page cannot
/// stall the crawl. Redirects follow reqwest's default policy.
///
/// # Arguments
///
/// * `timeout_seconds` - Per-request timeout from the configuration
pub fn build_http_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("ladle/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_seconds))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ExtractError)` - Transport failure, timeout, or non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ExtractError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ExtractError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ExtractError::Fetch {
        url: url.to_string(),
        source,
    })
}
