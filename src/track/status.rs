use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `[mm:ss]`, `[mm:ss.ff]` or `[mm:ss.fff]`, two ASCII digits per field.
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[0-9]{2}:[0-9]{2}(?:\.[0-9]{2,3})?\]").expect("timestamp pattern is valid")
});

/// Embedded cover art quality.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverStatus {
    #[default]
    None,
    Present,
    /// Reserved for a dimension check. `classify` never returns it.
    Verified,
}

impl CoverStatus {
    pub fn classify(image: &[u8]) -> Self {
        if image.is_empty() {
            Self::None
        } else {
            Self::Present
        }
    }
}

/// Embedded lyrics quality.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricsStatus {
    #[default]
    None,
    Unsynced,
    /// At least one line-timing token is present.
    Synced,
}

impl LyricsStatus {
    pub fn classify(lyrics: &str) -> Self {
        if lyrics.is_empty() {
            Self::None
        } else if TIMESTAMP.is_match(lyrics) {
            Self::Synced
        } else {
            Self::Unsynced
        }
    }
}
