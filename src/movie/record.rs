use crate::movie::Field;
use serde::{Deserialize, Serialize};

/// Release year used when the title block carries no usable year
pub const DEFAULT_RELEASE_YEAR: i32 = 1900;

/// Rating used when the rating element is absent or not a number
pub const DEFAULT_RATING: f64 = 0.0;

/// Fields as they were found on one detail page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub release_year: Field<i32>,
    pub rating: Field<f64>,
    pub summary: String,
    pub duration: String,
    pub genres: Vec<String>,
}

/// One movie as emitted in the output collection
///
/// Field order here is the key order of the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "imdb_rating")]
    pub rating: f64,

    pub title: String,

    #[serde(rename = "movie_release_year")]
    pub release_year: i32,

    pub summary: String,

    pub duration: String,

    /// Genre labels joined with `", "`
    pub genre: String,
}

impl From<MovieDetails> for MovieRecord {
    fn from(details: MovieDetails) -> Self {
        Self {
            rating: details.rating.unwrap_or(DEFAULT_RATING),
            title: details.title,
            release_year: details.release_year.unwrap_or(DEFAULT_RELEASE_YEAR),
            summary: details.summary,
            duration: details.duration,
            genre: details.genres.join(", "),
        }
    }
}
