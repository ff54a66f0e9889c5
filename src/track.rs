//! The per-file metadata record and its quality classifications.
//!
//! A `TrackRecord` is rebuilt from the file on every read; the codec never
//! keeps one around between calls.

mod model;
mod status;

pub use model::*;
pub use status::*;
