//! URL handling for the chart fetcher
//!
//! Detail links on a chart page are host-relative. They are rewritten to
//! absolute URLs using the chart URL's scheme and host.

mod origin;

pub use origin::{absolutize, origin_of};
