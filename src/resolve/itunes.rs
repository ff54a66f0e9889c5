use serde::Deserialize;

use super::error::{ResolveError, Result};
use super::transport::{Transport, fetch, parse_json};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "resultCount", default)]
    result_count: u32,
    #[serde(default)]
    results: Vec<AlbumHit>,
}

#[derive(Debug, Deserialize)]
struct AlbumHit {
    #[serde(rename = "artworkUrl100")]
    artwork_url_100: Option<String>,
}

/// Artwork URL of the best album match, resized for download.
pub(crate) fn artwork_url(
    transport: &impl Transport,
    search_url: &str,
    artist: &str,
    album: &str,
    force_500px: bool,
) -> Result<String> {
    let term = format!("{artist} {album}");
    let body = fetch(
        transport,
        search_url,
        &[("term", term.as_str()), ("entity", "album"), ("limit", "1")],
    )?;
    let response: SearchResponse = parse_json(search_url, &body)?;

    if response.result_count == 0 {
        return Err(ResolveError::NotFound(format!("iTunes album {term:?}")));
    }
    response
        .results
        .into_iter()
        .next()
        .and_then(|hit| hit.artwork_url_100)
        .filter(|url| !url.is_empty())
        .map(|url| resize(&url, force_500px))
        .ok_or_else(|| ResolveError::NotFound(format!("iTunes artwork for {term:?}")))
}

/// Rewrite the 100px thumbnail URL to the 500px or the 1000px rendition.
pub(crate) fn resize(url: &str, force_500px: bool) -> String {
    let size = if force_500px { "500x500" } else { "1000x1000" };
    url.replace("100x100", size)
}

pub(crate) fn fetch_artwork(
    transport: &impl Transport,
    search_url: &str,
    artist: &str,
    album: &str,
    force_500px: bool,
) -> Result<Vec<u8>> {
    let url = artwork_url(transport, search_url, artist, album, force_500px)?;
    fetch(transport, &url, &[])
}
