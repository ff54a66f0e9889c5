use std::io::Write;
use std::path::PathBuf;

use crate::config::{CoverSettings, CoverSource, NetworkSettings, Settings};
use crate::track::{LyricsCandidate, ReleaseCandidate};

use super::error::{ResolveError, Result};
use super::prefs::{LiveSettings, PreferenceSource};
use super::transport::{HttpTransport, Transport};
use super::{itunes, lrclib, musicbrainz};

const RELEASE_SEARCH_LIMIT: u32 = 10;

/// Cover art, release and lyrics lookups against the configured services.
///
/// Cover preferences come from `P` at the start of every call. Endpoints are
/// fixed when the resolver is built.
pub struct Resolver<T, P> {
    transport: T,
    prefs: P,
    network: NetworkSettings,
}

impl Resolver<HttpTransport, LiveSettings> {
    /// HTTP resolver that re-reads cover preferences from the config file on
    /// every call.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(&settings.network.user_agent)?;
        Ok(Self::new(transport, LiveSettings, settings.network.clone()))
    }
}

impl<T: Transport, P: PreferenceSource> Resolver<T, P> {
    pub fn new(transport: T, prefs: P, network: NetworkSettings) -> Self {
        Self {
            transport,
            prefs,
            network,
        }
    }

    /// Download cover artwork for an album into a temporary `tagfix_*.jpg`
    /// file that outlives the resolver. `None` when neither source has it.
    pub fn fetch_cover_artwork(&self, artist: &str, album: &str) -> Option<PathBuf> {
        collapse(
            "fetching cover artwork",
            self.try_fetch_cover_artwork(artist, album).map(Some),
            || None,
        )
    }

    /// Tries the preferred source, then the other one exactly once.
    pub fn try_fetch_cover_artwork(&self, artist: &str, album: &str) -> Result<PathBuf> {
        let prefs = self.prefs.cover_settings();
        let first = prefs.source;

        let image = match self.cover_from(first, artist, album, &prefs) {
            Ok(image) => image,
            Err(e) => {
                tracing::info!(
                    source = first.as_str(),
                    fallback = first.other().as_str(),
                    "cover lookup failed: {e}"
                );
                self.cover_from(first.other(), artist, album, &prefs)?
            }
        };
        persist_artwork(&image)
    }

    fn cover_from(
        &self,
        source: CoverSource,
        artist: &str,
        album: &str,
        prefs: &CoverSettings,
    ) -> Result<Vec<u8>> {
        match source {
            CoverSource::ITunes => itunes::fetch_artwork(
                &self.transport,
                &self.network.itunes_search_url,
                artist,
                album,
                prefs.force_500px,
            ),
            CoverSource::MusicBrainz => musicbrainz::fetch_artwork(
                &self.transport,
                &self.network.musicbrainz_url,
                &self.network.cover_archive_url,
                artist,
                album,
                prefs.force_500px,
            ),
        }
    }

    /// Up to ten candidate releases, in service order. Empty on failure.
    pub fn search_releases(&self, artist: &str, album: &str) -> Vec<ReleaseCandidate> {
        collapse(
            "searching releases",
            self.try_search_releases(artist, album),
            Vec::new,
        )
    }

    pub fn try_search_releases(&self, artist: &str, album: &str) -> Result<Vec<ReleaseCandidate>> {
        musicbrainz::search_releases(
            &self.transport,
            &self.network.musicbrainz_url,
            artist,
            album,
            RELEASE_SEARCH_LIMIT,
        )
    }

    /// Front cover bytes of a specific release. Empty on failure.
    pub fn fetch_cover_bytes(&self, release_id: &str) -> Vec<u8> {
        collapse(
            "fetching release cover",
            self.try_fetch_cover_bytes(release_id),
            Vec::new,
        )
    }

    pub fn try_fetch_cover_bytes(&self, release_id: &str) -> Result<Vec<u8>> {
        let prefs = self.prefs.cover_settings();
        musicbrainz::front_cover(
            &self.transport,
            &self.network.cover_archive_url,
            release_id,
            prefs.force_500px,
        )
    }

    /// Lyrics search hits, in service order. Empty on failure.
    pub fn search_lyrics_candidates(
        &self,
        artist: &str,
        title: &str,
        album: &str,
    ) -> Vec<LyricsCandidate> {
        collapse(
            "searching lyrics",
            self.try_search_lyrics_candidates(artist, title, album),
            Vec::new,
        )
    }

    pub fn try_search_lyrics_candidates(
        &self,
        artist: &str,
        title: &str,
        album: &str,
    ) -> Result<Vec<LyricsCandidate>> {
        lrclib::search(&self.transport, &self.network.lrclib_url, artist, title, album)
    }
}

/// Write `image` to a fresh `tagfix_*.jpg` in the temp directory and keep it.
fn persist_artwork(image: &[u8]) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("tagfix_")
        .suffix(".jpg")
        .tempfile()?;
    file.write_all(image)?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "stored cover artwork");
    Ok(path)
}

fn collapse<T>(operation: &'static str, result: Result<T>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(e @ ResolveError::NotFound(_)) => {
            tracing::debug!("{operation}: {e}");
            fallback()
        }
        Err(e) => {
            tracing::warn!("{operation} failed: {e}");
            fallback()
        }
    }
}
