//! Movie data model
//!
//! [`MovieDetails`] is what the extractor sees on a page, with numeric
//! fields kept as [`Field`] so that "absent" and "unparsable" stay
//! distinguishable. [`MovieRecord`] is the defaulted, serializable form.

mod field;
mod record;

pub use field::Field;
pub use record::{MovieDetails, MovieRecord, DEFAULT_RATING, DEFAULT_RELEASE_YEAR};
