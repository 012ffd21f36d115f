//! imdb-chart-fetcher: concurrent movie chart scraper
//!
//! This crate fetches a ranked movie chart, follows a bounded number of
//! per-movie detail links concurrently, and extracts a fixed set of fields
//! from each detail page into [`MovieRecord`]s.

pub mod config;
pub mod crawler;
pub mod movie;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for chart fetching operations
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Expected HTML from {url}, got {content_type}")]
    ContentMismatch { url: String, content_type: String },

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Detail task did not complete: {0}")]
    Task(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for chart fetching operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{FailurePolicy, FetchConfig, FetcherConfig};
pub use crawler::{collect, Collection, Collector, TaskFailure};
pub use movie::{Field, MovieDetails, MovieRecord};
