use crate::UrlError;
use url::Url;

/// Returns the `scheme://host[:port]` prefix of a URL
///
/// Only the port that was written explicitly (and is not the scheme's
/// default) is kept.
///
/// # Arguments
///
/// * `url_str` - The URL to take the origin from
///
/// # Returns
///
/// * `Ok(String)` - The origin prefix, without a trailing slash
/// * `Err(UrlError)` - The URL could not be parsed or has no host
///
/// # Examples
///
/// ```
/// use imdb_chart_fetcher::url::origin_of;
///
/// let origin = origin_of("https://www.imdb.com/chart/top?ref_=nv").unwrap();
/// assert_eq!(origin, "https://www.imdb.com");
///
/// let origin = origin_of("http://127.0.0.1:8080/chart").unwrap();
/// assert_eq!(origin, "http://127.0.0.1:8080");
/// ```
pub fn origin_of(url_str: &str) -> Result<String, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    let host = url
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(url_str.to_string()))?;

    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

/// Turns an href into an absolute link under `origin`
///
/// Hrefs that already carry an http(s) scheme are returned unchanged.
/// Anything else is treated as a host-relative path and appended to the
/// origin, with a leading `/` inserted when the href lacks one.
///
/// # Examples
///
/// ```
/// use imdb_chart_fetcher::url::absolutize;
///
/// assert_eq!(
///     absolutize("https://www.imdb.com", "/title/tt0111161/"),
///     "https://www.imdb.com/title/tt0111161/"
/// );
/// assert_eq!(
///     absolutize("https://www.imdb.com", "https://m.imdb.com/title/tt1/"),
///     "https://m.imdb.com/title/tt1/"
/// );
/// ```
pub fn absolutize(origin: &str, href: &str) -> String {
    let href = href.trim();

    if let Ok(url) = Url::parse(href) {
        if url.scheme() == "http" || url.scheme() == "https" {
            return href.to_string();
        }
    }

    if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}
