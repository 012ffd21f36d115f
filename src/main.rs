//! imdb-chart-fetcher main entry point
//!
//! This is the command-line interface for the movie chart fetcher.

use clap::Parser;
use imdb_chart_fetcher::config::{FailurePolicy, FetchConfig, FetcherConfig, DEFAULT_USER_AGENT};
use imdb_chart_fetcher::crawler::{Collection, Collector};
use imdb_chart_fetcher::output::{write_json, write_statistics, CollectStatistics};
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

/// Fetches a movie chart and prints the top entries as JSON
///
/// The chart page is fetched once, the first COUNT detail links are fetched
/// concurrently, and the extracted movies are printed to stdout as a single
/// JSON array. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "imdb-chart-fetcher")]
#[command(version)]
#[command(about = "Fetch a movie chart and print its entries as JSON", long_about = None)]
struct Cli {
    /// URL of the chart page
    #[arg(value_name = "URL")]
    chart_url: String,

    /// Number of movies to fetch (positive integer)
    #[arg(value_name = "COUNT")]
    count: NonZeroUsize,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Skip detail pages that fail to fetch instead of aborting the run
    #[arg(long)]
    skip_failed: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        let defaults = FetcherConfig::default();

        FetchConfig {
            fetcher: FetcherConfig {
                user_agent: self.user_agent.clone(),
                request_timeout_secs: self.timeout,
                connect_timeout_secs: defaults.connect_timeout_secs.min(self.timeout.max(1)),
            },
            failure_policy: if self.skip_failed {
                FailurePolicy::SkipFailed
            } else {
                FailurePolicy::FailFast
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = cli.fetch_config();
    let collector = match Collector::new(&config) {
        Ok(collector) => collector,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Fetching up to {} movies from {}",
        cli.count,
        cli.chart_url
    );

    let collection = match collector.collect(&cli.chart_url, cli.count.get()).await {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!("Fetch failed: {}", e);
            return Err(e.into());
        }
    };

    report(&collection, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_json(&mut stdout, &collection.movies, cli.pretty) {
        tracing::error!("Failed to write output: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs are written to stderr; stdout is reserved for the JSON output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("imdb_chart_fetcher=info,warn"),
            1 => EnvFilter::new("imdb_chart_fetcher=debug,info"),
            _ => EnvFilter::new("imdb_chart_fetcher=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Writes the run summary to stderr when some links were skipped
fn report(collection: &Collection, quiet: bool) {
    if quiet || collection.is_complete() {
        return;
    }

    let stats = CollectStatistics::from_collection(collection);
    tracing::warn!(
        "{} of {} detail pages failed and were skipped",
        stats.failures(),
        stats.tasks
    );

    if let Err(e) = write_statistics(&stats, &mut std::io::stderr().lock()) {
        tracing::debug!("Could not write statistics: {}", e);
    }
}
