use std::path::{Path, PathBuf};

use serde::Serialize;

use super::status::{CoverStatus, LyricsStatus};

/// Editable metadata for one audio file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRecord {
    /// Display name, the last component of `path`.
    pub filename: String,
    /// Location the record was read from; identifies the record.
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    pub genre: String,
    /// Release year as text. Empty means unset.
    pub year: String,
    /// Plain lyrics text, possibly carrying `[MM:SS.ff]` timestamps.
    pub lyrics: String,
    pub cover_status: CoverStatus,
    pub lyrics_status: LyricsStatus,
    /// Stream length in seconds, 0 when the properties could not be read.
    pub duration: f64,
}

impl TrackRecord {
    /// An empty record for `path`, with only `filename` and `path` populated.
    pub fn new(path: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            filename,
            path: path.to_path_buf(),
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            album_artist: String::new(),
            genre: String::new(),
            year: String::new(),
            lyrics: String::new(),
            cover_status: CoverStatus::None,
            lyrics_status: LyricsStatus::None,
            duration: 0.0,
        }
    }

    /// Set a text field by its canonical name. Returns `false` for unknown
    /// or read-only fields.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "artist" => &mut self.artist,
            "album" => &mut self.album,
            "album_artist" | "albumartist" => &mut self.album_artist,
            "genre" => &mut self.genre,
            "year" => &mut self.year,
            "lyrics" => &mut self.lyrics,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// A catalogued edition of an album, as returned by a release search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseCandidate {
    /// Identifier assigned by the release database.
    pub id: String,
    pub title: String,
    /// First credited artist only.
    pub artist: String,
    pub date: String,
    pub country: String,
}

/// One lyrics search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LyricsCandidate {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub plain_text: String,
    pub synced_text: String,
}

impl LyricsCandidate {
    /// Text a caller should embed: synced lyrics when available, plain otherwise.
    pub fn preferred_text(&self) -> &str {
        if self.synced_text.trim().is_empty() {
            &self.plain_text
        } else {
            &self.synced_text
        }
    }

    pub fn has_synced(&self) -> bool {
        !self.synced_text.trim().is_empty()
    }
}
