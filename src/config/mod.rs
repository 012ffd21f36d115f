//! Configuration module for the chart fetcher
//!
//! Configuration is assembled from command-line flags only; there is no
//! configuration file and no environment lookup.
//!
//! # Example
//!
//! ```
//! use imdb_chart_fetcher::config::{validate, FailurePolicy, FetchConfig};
//!
//! let config = FetchConfig {
//!     failure_policy: FailurePolicy::SkipFailed,
//!     ..FetchConfig::default()
//! };
//! assert!(validate(&config).is_ok());
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{FailurePolicy, FetchConfig, FetcherConfig, DEFAULT_USER_AGENT};

// Re-export validation
pub use validation::validate;
