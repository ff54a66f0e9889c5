use serde::Deserialize;

use super::error::Result;
use super::transport::{Transport, fetch, parse_json};
use crate::track::LyricsCandidate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LrclibHit {
    artist_name: Option<String>,
    track_name: Option<String>,
    album_name: Option<String>,
    plain_lyrics: Option<String>,
    synced_lyrics: Option<String>,
}

impl From<LrclibHit> for LyricsCandidate {
    fn from(hit: LrclibHit) -> Self {
        Self {
            artist: hit.artist_name.unwrap_or_default(),
            title: hit.track_name.unwrap_or_default(),
            album: hit.album_name.unwrap_or_default(),
            plain_text: hit.plain_lyrics.unwrap_or_default(),
            synced_text: hit.synced_lyrics.unwrap_or_default(),
        }
    }
}

/// Free-text search term: the parts joined by spaces, outer whitespace removed.
pub(crate) fn search_term(artist: &str, title: &str, album: &str) -> String {
    format!("{artist} {title} {album}").trim().to_string()
}

pub(crate) fn search(
    transport: &impl Transport,
    base_url: &str,
    artist: &str,
    title: &str,
    album: &str,
) -> Result<Vec<LyricsCandidate>> {
    let url = format!("{}/search", base_url.trim_end_matches('/'));
    let term = search_term(artist, title, album);

    let body = fetch(transport, &url, &[("q", term.as_str())])?;
    let hits: Vec<LrclibHit> = parse_json(&url, &body)?;
    Ok(hits.into_iter().map(LyricsCandidate::from).collect())
}
