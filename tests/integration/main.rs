//! Integration tests for the chart fetcher
//!
//! These tests use wiremock to serve a mock chart page and mock detail pages
//! and run the full fetch-and-collect cycle end-to-end.

mod collect_tests;
