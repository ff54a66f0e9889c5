use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagfix/config.toml` or `~/.config/tagfix/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAGFIX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub covers: CoverSettings,
    pub lyrics: LyricsSettings,
    pub network: NetworkSettings,
}

/// Which catalog is asked first when fetching cover artwork.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum CoverSource {
    #[serde(rename = "iTunes", alias = "itunes", alias = "ITunes")]
    ITunes,
    #[serde(rename = "MusicBrainz", alias = "musicbrainz", alias = "mb")]
    MusicBrainz,
}

impl CoverSource {
    /// The source tried when this one comes back empty.
    pub fn other(self) -> Self {
        match self {
            Self::ITunes => Self::MusicBrainz,
            Self::MusicBrainz => Self::ITunes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ITunes => "iTunes",
            Self::MusicBrainz => "MusicBrainz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverSettings {
    /// Catalog queried first by cover lookups.
    pub source: CoverSource,
    /// Prefer the 500px standardized size over the larger original.
    pub force_500px: bool,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            source: CoverSource::ITunes,
            force_500px: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LyricsSettings {
    /// Fetch lyrics automatically when a track is opened. Read by front ends only.
    pub auto_fetch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Sent as `User-Agent` on every outbound request.
    pub user_agent: String,
    pub itunes_search_url: String,
    /// MusicBrainz web service root (without the `/release` entity path).
    pub musicbrainz_url: String,
    pub cover_archive_url: String,
    /// LRCLIB API root (without the `/search` path).
    pub lrclib_url: String,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            user_agent: "TagFix/1.0 (https://github.com/tagfix)".to_string(),
            itunes_search_url: "https://itunes.apple.com/search".to_string(),
            musicbrainz_url: "https://musicbrainz.org/ws/2".to_string(),
            cover_archive_url: "https://coverartarchive.org".to_string(),
            lrclib_url: "https://lrclib.net/api".to_string(),
        }
    }
}
