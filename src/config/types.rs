/// User agent sent when none is given on the command line
pub const DEFAULT_USER_AGENT: &str = concat!("imdb-chart-fetcher/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for a fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// HTTP client settings shared by every fetch in the run
    pub fetcher: FetcherConfig,

    /// What the collector does when a detail fetch fails
    pub failure_policy: FailurePolicy,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    pub request_timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// How the collector treats a failed detail task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The first failure aborts the run; no partial collection is produced
    #[default]
    FailFast,

    /// Failed links are recorded and skipped; the rest are still returned
    SkipFailed,
}

impl FailurePolicy {
    /// Returns true if a single failure should end the collection
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FailFast)
    }
}
