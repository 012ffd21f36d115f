//! Fan-out collector - chart to movie records
//!
//! The collector fetches the chart once, keeps the first `count` detail
//! links, and spawns one task per link. Each task fetches and extracts its
//! page independently and hands back a tagged result; all tasks are joined
//! at a single point and records are kept in completion order.

use crate::config::{validate, FailurePolicy, FetchConfig};
use crate::crawler::discover::discover_links;
use crate::crawler::extract::parse_detail_page;
use crate::crawler::fetcher::{build_http_client, fetch_document, fetch_page};
use crate::movie::MovieRecord;
use crate::ChartError;
use reqwest::Client;
use std::time::Instant;
use tokio::task::JoinSet;

/// A detail link that did not produce a record
#[derive(Debug)]
pub struct TaskFailure {
    /// The detail link, when the task got far enough to report it
    pub url: Option<String>,

    /// Why the task failed
    pub error: ChartError,
}

/// Records gathered from one chart, in completion order
#[derive(Debug, Default)]
pub struct Collection {
    /// Extracted movies
    pub movies: Vec<MovieRecord>,

    /// Links that failed (only populated under `FailurePolicy::SkipFailed`)
    pub failures: Vec<TaskFailure>,
}

impl Collection {
    /// Number of tasks that were joined
    pub fn tasks_joined(&self) -> usize {
        self.movies.len() + self.failures.len()
    }

    /// Returns true if every launched task produced a record
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Main collector structure
pub struct Collector {
    client: Client,
    policy: FailurePolicy,
}

impl Collector {
    /// Creates a collector from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Collector)` - Configuration is valid and the HTTP client was built
    /// * `Err(ChartError)` - Invalid configuration or client build failure
    pub fn new(config: &FetchConfig) -> Result<Self, ChartError> {
        validate(config)?;

        let client = build_http_client(&config.fetcher)?;

        Ok(Self::with_client(client, config.failure_policy))
    }

    /// Creates a collector around an existing HTTP client
    pub fn with_client(client: Client, policy: FailurePolicy) -> Self {
        Self { client, policy }
    }

    /// Fetches the chart and collects up to `requested_count` movies
    ///
    /// # Steps
    ///
    /// 1. Fetch the chart document
    /// 2. Discover detail links in chart order
    /// 3. Keep the first `min(requested_count, links)` links
    /// 4. Fan out one task per kept link and join them all
    ///
    /// # Returns
    ///
    /// * `Ok(Collection)` - All tasks joined (failures recorded if skipping)
    /// * `Err(ChartError)` - Chart failure, or the first detail failure under
    ///   `FailurePolicy::FailFast`
    pub async fn collect(
        &self,
        chart_url: &str,
        requested_count: usize,
    ) -> Result<Collection, ChartError> {
        let links = self.discover(chart_url).await?;
        let discovered = links.len();

        let selected: Vec<String> = links.into_iter().take(requested_count).collect();
        tracing::info!(
            "Discovered {} links, fetching {} detail pages",
            discovered,
            selected.len()
        );

        self.fan_out(selected).await
    }

    /// Fetches the chart page and returns its detail links
    async fn discover(&self, chart_url: &str) -> Result<Vec<String>, ChartError> {
        let document = fetch_document(&self.client, chart_url).await?;
        Ok(discover_links(&document, chart_url)?)
    }

    /// Spawns one task per link and joins every one of them
    ///
    /// Results are appended as tasks finish, so the output order is
    /// completion order rather than link order. Under `FailFast`, returning
    /// early drops the `JoinSet`, which aborts the tasks still in flight.
    pub async fn fan_out(&self, links: Vec<String>) -> Result<Collection, ChartError> {
        let launched = links.len();
        let start_time = Instant::now();

        let mut tasks = JoinSet::new();
        for link in links {
            tasks.spawn(fetch_movie(self.client.clone(), link));
        }

        let mut collection = Collection {
            movies: Vec::with_capacity(launched),
            failures: Vec::new(),
        };

        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok((url, Ok(movie))) => {
                    tracing::debug!("Extracted '{}' from {}", movie.title, url);
                    collection.movies.push(movie);
                    continue;
                }
                Ok((url, Err(error))) => TaskFailure {
                    url: Some(url),
                    error,
                },
                Err(join_error) => TaskFailure {
                    url: None,
                    error: ChartError::Task(join_error.to_string()),
                },
            };

            if self.policy.is_fatal() {
                tracing::error!(
                    "Detail fetch failed for {}: {}",
                    failure.url.as_deref().unwrap_or("<unknown>"),
                    failure.error
                );
                return Err(failure.error);
            }

            tracing::warn!(
                "Skipping {}: {}",
                failure.url.as_deref().unwrap_or("<unknown>"),
                failure.error
            );
            collection.failures.push(failure);
        }

        tracing::info!(
            "Joined {} of {} tasks in {:?}: {} records, {} failed",
            collection.tasks_joined(),
            launched,
            start_time.elapsed(),
            collection.movies.len(),
            collection.failures.len()
        );

        Ok(collection)
    }
}

/// One detail task: fetch, extract, and tag the result with its link
async fn fetch_movie(client: Client, url: String) -> (String, Result<MovieRecord, ChartError>) {
    let result = fetch_page(&client, &url)
        .await
        .map(|body| parse_detail_page(&body));
    (url, result)
}

/// Runs a complete collection with a fresh collector
///
/// # Example
///
/// ```no_run
/// use imdb_chart_fetcher::config::FetchConfig;
/// use imdb_chart_fetcher::crawler::collect;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let collection = collect("https://www.imdb.com/chart/top", 10, &FetchConfig::default()).await?;
/// println!("{} movies", collection.movies.len());
/// # Ok(())
/// # }
/// ```
pub async fn collect(
    chart_url: &str,
    requested_count: usize,
    config: &FetchConfig,
) -> Result<Collection, ChartError> {
    let collector = Collector::new(config)?;
    collector.collect(chart_url, requested_count).await
}
