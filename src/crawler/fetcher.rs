//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during a run:
//! - Building the shared HTTP client with the configured user agent
//! - GET requests for chart and detail pages
//! - Error classification (timeout, status, content type)
//! - Parsing the body into a navigable document
//!
//! There is no retry logic; every failure is reported once to the caller.

use crate::config::FetcherConfig;
use crate::ChartError;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```
/// use imdb_chart_fetcher::config::FetcherConfig;
/// use imdb_chart_fetcher::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text
///
/// # Error Classification
///
/// | Condition | Error |
/// |-----------|-------|
/// | Timeout | `ChartError::Timeout` |
/// | Connection / transport failure | `ChartError::Http` |
/// | Non-2xx status | `ChartError::HttpStatus` |
/// | Content-Type present and not HTML | `ChartError::ContentMismatch` |
/// | Body read failure | `ChartError::Http` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ChartError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(http_status_error(url, status));
    }

    if let Some(content_type) = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !content_type.contains("html") {
            return Err(ChartError::ContentMismatch {
                url: url.to_string(),
                content_type: content_type.to_string(),
            });
        }
    }

    let body = response.text().await.map_err(|e| classify_error(url, e))?;
    tracing::debug!("Fetched {} ({} bytes)", url, body.len());

    Ok(body)
}

/// Fetches a page and parses it into a document tree
///
/// The document is built after the last await point, so callers running in a
/// spawned task must finish with it before awaiting anything else.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch; not validated beforehand
///
/// # Returns
///
/// * `Ok(Html)` - The parsed document
/// * `Err(ChartError)` - The page could not be retrieved
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, ChartError> {
    let body = fetch_page(client, url).await?;
    Ok(Html::parse_document(&body))
}

fn classify_error(url: &str, error: reqwest::Error) -> ChartError {
    if error.is_timeout() {
        ChartError::Timeout {
            url: url.to_string(),
        }
    } else {
        ChartError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

fn http_status_error(url: &str, status: StatusCode) -> ChartError {
    ChartError::HttpStatus {
        url: url.to_string(),
        status: status.as_u16(),
    }
}
