//! Link discovery on the chart page
//!
//! The chart lists one row per movie; the title cell of each row links to
//! the movie's detail page with a host-relative href.

use crate::url::{absolutize, origin_of};
use crate::UrlError;
use scraper::{Html, Selector};

/// Anchors inside the chart's title column
const TITLE_COLUMN_LINKS: &str = ".titleColumn a";

/// Extracts detail-page links from a chart document
///
/// Links are returned in document order, absolutized against the scheme
/// and host of `chart_url`. Anchors without an `href` are skipped. There is
/// no deduplication and no reachability check.
///
/// # Arguments
///
/// * `document` - The parsed chart page
/// * `chart_url` - The URL the chart was fetched from
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Absolute detail links (possibly empty)
/// * `Err(UrlError)` - `chart_url` could not be parsed or has no host
///
/// # Example
///
/// ```
/// use imdb_chart_fetcher::crawler::discover_links;
/// use scraper::Html;
///
/// let html = r#"<table><tr><td class="titleColumn">
///     <a href="/title/tt0111161/">The Shawshank Redemption</a>
/// </td></tr></table>"#;
/// let document = Html::parse_document(html);
/// let links = discover_links(&document, "https://www.imdb.com/chart/top").unwrap();
/// assert_eq!(links, vec!["https://www.imdb.com/title/tt0111161/"]);
/// ```
pub fn discover_links(document: &Html, chart_url: &str) -> Result<Vec<String>, UrlError> {
    let origin = origin_of(chart_url)?;

    let selector = match Selector::parse(TITLE_COLUMN_LINKS) {
        Ok(selector) => selector,
        Err(_) => return Ok(Vec::new()),
    };

    let mut links = Vec::new();
    for element in document.select(&selector) {
        match element.value().attr("href") {
            Some(href) => links.push(absolutize(&origin, href)),
            None => tracing::debug!("Skipping title anchor without href"),
        }
    }

    tracing::debug!("Discovered {} detail links on {}", links.len(), chart_url);
    Ok(links)
}
