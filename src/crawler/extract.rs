//! Field extraction from movie detail pages
//!
//! Every sub-extraction has a fallback, so extraction itself never fails:
//! missing elements give empty text and unparsable numbers are kept as
//! [`Field::Unparsable`] until a [`MovieRecord`] is built.

use crate::movie::{Field, MovieDetails, MovieRecord};
use scraper::{Html, Selector};

/// Heading holding the title and a parenthesized release year
const TITLE_BLOCK: &str = "div .title_wrapper h1";

/// Headline rating value
const RATING: &str = "div div strong span";

/// Plot summary paragraph
const SUMMARY: &str = "div .summary_text";

/// Runtime inside the subtext line
const DURATION: &str = "div .subtext time";

/// Genre links plus the release-date link in the subtext line
const SUBTEXT_LINKS: &str = "div .subtext a";

/// Number of anchors at the end of the subtext line that are not genres
///
/// The subtext line ends with the release-date/certificate link, which is
/// identified by position only.
pub const NON_GENRE_TRAILING_ANCHORS: usize = 1;

/// Extracts movie fields from a parsed detail page
///
/// # Extraction Rules
///
/// | Field | Source | Fallback |
/// |-------|--------|----------|
/// | title | title block text before the first `(` | empty |
/// | release year | title block text after the first `(`, minus `)` | `Missing` / `Unparsable` |
/// | rating | rating headline text | `Missing` / `Unparsable` |
/// | summary | summary text | empty |
/// | duration | `time` element in the subtext line | empty |
/// | genres | subtext anchors except the trailing non-genre one | empty list |
///
/// Known limitation: a title that itself contains `(` before the year is
/// split at that parenthesis, so its year is lost.
///
/// # Example
///
/// ```
/// use imdb_chart_fetcher::crawler::extract_details;
/// use imdb_chart_fetcher::movie::Field;
/// use scraper::Html;
///
/// let html = r#"<div><div class="title_wrapper"><h1>Inception (2010)</h1></div></div>"#;
/// let details = extract_details(&Html::parse_document(html));
/// assert_eq!(details.title, "Inception");
/// assert_eq!(details.release_year, Field::Parsed(2010));
/// ```
pub fn extract_details(document: &Html) -> MovieDetails {
    let (title, release_year) = split_title_block(&select_text(document, TITLE_BLOCK));

    let rating_text = select_text(document, RATING);
    let rating = Field::<f64>::parse(&rating_text).filter(|v| v.is_finite(), &rating_text);

    let details = MovieDetails {
        title,
        release_year,
        rating,
        summary: select_text(document, SUMMARY).trim().to_string(),
        duration: select_text(document, DURATION).trim().to_string(),
        genres: genre_labels(select_all_text(document, SUBTEXT_LINKS)),
    };

    if details.rating.is_defaulted() || details.release_year.is_defaulted() {
        tracing::trace!(
            "Defaulting fields for '{}': year={:?}, rating={:?}",
            details.title,
            details.release_year,
            details.rating
        );
    }

    details
}

/// Extracts and defaults a detail page in one step
pub fn extract_record(document: &Html) -> MovieRecord {
    MovieRecord::from(extract_details(document))
}

/// Parses a detail page body and extracts its record
///
/// The document lives only for the duration of this call.
pub fn parse_detail_page(body: &str) -> MovieRecord {
    extract_record(&Html::parse_document(body))
}

/// Splits `"Title (Year)"` into its title and year parts
fn split_title_block(raw: &str) -> (String, Field<i32>) {
    let text = raw.trim();

    match text.split_once('(') {
        Some((title, rest)) => {
            let rest = rest.trim_end();
            let year_text = rest.strip_suffix(')').unwrap_or(rest);
            (title.trim().to_string(), Field::parse(year_text))
        }
        None => (text.to_string(), Field::Missing),
    }
}

/// Drops the trailing non-genre anchors and trims the rest
fn genre_labels(anchors: Vec<String>) -> Vec<String> {
    let genre_count = anchors.len().saturating_sub(NON_GENRE_TRAILING_ANCHORS);

    anchors
        .into_iter()
        .take(genre_count)
        .map(|label| label.trim().to_string())
        .collect()
}

/// Concatenated text of every element matching `selector`
fn select_text(document: &Html, selector: &str) -> String {
    select_all_text(document, selector).concat()
}

/// Text of each element matching `selector`, in document order
fn select_all_text(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}
