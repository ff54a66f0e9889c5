//! Online lookups: cover artwork from iTunes or MusicBrainz with the Cover Art
//! Archive, release candidates from MusicBrainz, and lyrics from LRCLIB.
//!
//! All calls are blocking and make a fixed, small number of sequential
//! requests. Plain methods log failures and return empty values; the `try_*`
//! methods return a [`ResolveError`].

mod engine;
mod error;
mod itunes;
mod lrclib;
mod musicbrainz;
mod prefs;
mod transport;


pub use engine::Resolver;
pub use error::{ResolveError, Result};
pub use prefs::{LiveSettings, PreferenceSource};
pub use transport::{HttpResponse, HttpTransport, Transport};
