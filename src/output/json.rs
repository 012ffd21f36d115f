use crate::movie::MovieRecord;
use crate::ChartError;
use std::io::Write;

/// Serializes movies as a JSON array
///
/// Keys follow the declaration order of [`MovieRecord`]. With `pretty` unset
/// the result is a single line.
///
/// # Example
///
/// ```
/// use imdb_chart_fetcher::output::to_json;
///
/// assert_eq!(to_json(&[], false).unwrap(), "[]");
/// ```
pub fn to_json(movies: &[MovieRecord], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(movies)
    } else {
        serde_json::to_string(movies)
    }
}

/// Writes the serialized collection followed by a newline
///
/// Serialization happens before anything is written, so a failure leaves the
/// writer untouched.
pub fn write_json<W: Write>(
    writer: &mut W,
    movies: &[MovieRecord],
    pretty: bool,
) -> Result<(), ChartError> {
    let json = to_json(movies, pretty)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
