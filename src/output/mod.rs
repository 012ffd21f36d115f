//! Output module for emitting collected movies
//!
//! This module handles:
//! - Serializing the movie collection as JSON for stdout
//! - Summarizing a collection run (records, failures) for the log stream

mod json;
pub mod stats;

pub use json::{to_json, write_json};
pub use stats::{write_statistics, CollectStatistics};
