//! Crawler module for chart and detail page processing
//!
//! This module contains the fetch-and-parse pipeline:
//! - HTTP fetching of chart and detail pages
//! - Detail link discovery on the chart page
//! - Field extraction from detail pages
//! - Concurrent fan-out over detail links and collection of the results

mod collector;
mod discover;
mod extract;
mod fetcher;

pub use collector::{collect, Collection, Collector, TaskFailure};
pub use discover::discover_links;
pub use extract::{extract_details, extract_record, parse_detail_page, NON_GENRE_TRAILING_ANCHORS};
pub use fetcher::{build_http_client, fetch_document, fetch_page};
