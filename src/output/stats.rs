//! Statistics for a collection run
//!
//! Summaries are written to the log stream (stderr), never to stdout, which
//! carries only the JSON collection.

use crate::crawler::Collection;
use crate::ChartError;
use std::collections::BTreeMap;
use std::io::Write;

/// Collection run summary
#[derive(Debug, Clone, Default)]
pub struct CollectStatistics {
    /// Number of detail tasks joined
    pub tasks: usize,

    /// Number of records extracted
    pub records: usize,

    /// Failed tasks grouped by error kind
    pub failures_by_kind: BTreeMap<&'static str, usize>,
}

impl CollectStatistics {
    /// Builds statistics from a finished collection
    pub fn from_collection(collection: &Collection) -> Self {
        let mut failures_by_kind = BTreeMap::new();
        for failure in &collection.failures {
            *failures_by_kind.entry(error_kind(&failure.error)).or_insert(0) += 1;
        }

        Self {
            tasks: collection.tasks_joined(),
            records: collection.movies.len(),
            failures_by_kind,
        }
    }

    /// Total number of failed tasks
    pub fn failures(&self) -> usize {
        self.failures_by_kind.values().sum()
    }

    /// Percentage of tasks that produced a record
    pub fn success_rate(&self) -> f64 {
        if self.tasks > 0 {
            (self.records as f64 / self.tasks as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Short label used to group failures
fn error_kind(error: &ChartError) -> &'static str {
    match error {
        ChartError::Http { .. } | ChartError::Reqwest(_) => "network",
        ChartError::Timeout { .. } => "timeout",
        ChartError::HttpStatus { .. } => "http-status",
        ChartError::ContentMismatch { .. } => "content-type",
        ChartError::Url(_) => "url",
        ChartError::Task(_) => "task",
        ChartError::Config(_) | ChartError::Serialize(_) | ChartError::Io(_) => "other",
    }
}

/// Writes a human-readable summary of the statistics
pub fn write_statistics<W: Write>(stats: &CollectStatistics, writer: &mut W) -> std::io::Result<()> {
    writeln!(
        writer,
        "Collected {} / {} movies ({:.1}% success)",
        stats.records,
        stats.tasks,
        stats.success_rate()
    )?;

    if !stats.failures_by_kind.is_empty() {
        writeln!(writer, "Failures ({}):", stats.failures())?;
        for (kind, count) in &stats.failures_by_kind {
            writeln!(writer, "  {}: {}", kind, count)?;
        }
    }

    Ok(())
}
