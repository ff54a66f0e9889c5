use serde::Deserialize;

use super::error::{ResolveError, Result};
use super::transport::{Transport, body_of, fetch, parse_json};
use crate::track::ReleaseCandidate;

#[derive(Debug, Deserialize)]
struct ReleaseSearch {
    #[serde(default)]
    releases: Vec<MbRelease>,
}

#[derive(Debug, Deserialize)]
struct MbRelease {
    #[serde(default)]
    id: String,
    title: Option<String>,
    date: Option<String>,
    country: Option<String>,
    #[serde(rename = "artist-credit", default)]
    artist_credit: Vec<MbArtistCredit>,
}

#[derive(Debug, Deserialize)]
struct MbArtistCredit {
    artist: MbArtist,
}

#[derive(Debug, Deserialize)]
struct MbArtist {
    name: Option<String>,
}

impl From<MbRelease> for ReleaseCandidate {
    fn from(r: MbRelease) -> Self {
        let artist = r
            .artist_credit
            .into_iter()
            .next()
            .and_then(|credit| credit.artist.name)
            .unwrap_or_default();
        Self {
            id: r.id,
            title: r.title.unwrap_or_default(),
            artist,
            date: r.date.unwrap_or_default(),
            country: r.country.unwrap_or_default(),
        }
    }
}

/// Lucene query matching `artist` and `album` as phrases.
pub(crate) fn release_query(artist: &str, album: &str) -> String {
    format!("artist:\"{artist}\" AND release:\"{album}\"")
}

/// Releases matching `artist` and `album`, in the order the service ranks them.
pub(crate) fn search_releases(
    transport: &impl Transport,
    base_url: &str,
    artist: &str,
    album: &str,
    limit: u32,
) -> Result<Vec<ReleaseCandidate>> {
    let url = format!("{}/release", base_url.trim_end_matches('/'));
    let query = release_query(artist, album);
    let limit_param = limit.to_string();

    let body = fetch(
        transport,
        &url,
        &[("query", query.as_str()), ("fmt", "json"), ("limit", limit_param.as_str())],
    )?;
    let search: ReleaseSearch = parse_json(&url, &body)?;
    Ok(search
        .releases
        .into_iter()
        .take(limit as usize)
        .map(ReleaseCandidate::from)
        .collect())
}

/// Front cover of a release from the Cover Art Archive.
///
/// With `force_500px` the 500px thumbnail is asked for first, and a 404 on it
/// falls back to the original image once.
pub(crate) fn front_cover(
    transport: &impl Transport,
    archive_url: &str,
    release_id: &str,
    force_500px: bool,
) -> Result<Vec<u8>> {
    let base = format!("{}/release/{release_id}", archive_url.trim_end_matches('/'));
    let original = format!("{base}/front");

    if force_500px {
        let sized = format!("{base}/front-500");
        let response = transport.get(&sized, &[])?;
        if response.status != 404 {
            return body_of(&sized, response);
        }
        tracing::debug!(release = %release_id, "no 500px cover, trying the original");
    }
    fetch(transport, &original, &[])
}

/// Cover of the best release match for `artist` and `album`.
pub(crate) fn fetch_artwork(
    transport: &impl Transport,
    base_url: &str,
    archive_url: &str,
    artist: &str,
    album: &str,
    force_500px: bool,
) -> Result<Vec<u8>> {
    let release = search_releases(transport, base_url, artist, album, 1)?
        .into_iter()
        .next()
        .filter(|r| !r.id.is_empty())
        .ok_or_else(|| {
            ResolveError::NotFound(format!("MusicBrainz release {:?}", release_query(artist, album)))
        })?;
    front_cover(transport, archive_url, &release.id, force_500px)
}
