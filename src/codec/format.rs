use std::path::Path;

use lofty::picture::MimeType;
use lofty::tag::TagType;

/// Codec variant chosen for a file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContainerFormat {
    /// MP3: ID3v2 frames.
    Mpeg,
    /// FLAC: picture blocks plus Vorbis comments.
    Flac,
    /// M4A: `ilst` atoms.
    Mp4,
    /// Anything else. Text tags only.
    Generic,
}

/// What a codec variant can do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub reads_cover: bool,
    pub writes_cover: bool,
    pub reads_lyrics: bool,
    pub writes_lyrics: bool,
    pub reads_tags: bool,
    pub writes_tags: bool,
}

impl Capabilities {
    const FULL: Self = Self {
        reads_cover: true,
        writes_cover: true,
        reads_lyrics: true,
        writes_lyrics: true,
        reads_tags: true,
        writes_tags: true,
    };

    const TAGS_ONLY: Self = Self {
        reads_cover: false,
        writes_cover: false,
        reads_lyrics: false,
        writes_lyrics: false,
        reads_tags: true,
        writes_tags: true,
    };
}

/// How an incoming cover replaces the pictures already stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum CoverReplacement {
    /// Drop front-cover pictures, keep the other picture types.
    FrontCovers,
    /// Drop every stored picture.
    AllPictures,
}

/// Recognized extensions, matched case-sensitively against the end of the path.
const REGISTRY: &[(&str, ContainerFormat)] = &[
    (".mp3", ContainerFormat::Mpeg),
    (".flac", ContainerFormat::Flac),
    (".m4a", ContainerFormat::Mp4),
];

impl ContainerFormat {
    /// Pick the codec variant for `path`. `song.MP3` and `song.mp4` are `Generic`.
    pub fn for_path(path: &Path) -> Self {
        let path = path.to_string_lossy();
        REGISTRY
            .iter()
            .find(|(ext, _)| path.ends_with(*ext))
            .map(|&(_, format)| format)
            .unwrap_or(Self::Generic)
    }

    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Mpeg | Self::Flac | Self::Mp4 => Capabilities::FULL,
            Self::Generic => Capabilities::TAGS_ONLY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mpeg => "mp3",
            Self::Flac => "flac",
            Self::Mp4 => "m4a",
            Self::Generic => "generic",
        }
    }

    /// Tag layer that stores pictures and lyrics.
    pub(crate) fn media_tag_type(self) -> Option<TagType> {
        match self {
            Self::Mpeg => Some(TagType::Id3v2),
            Self::Flac => Some(TagType::VorbisComments),
            Self::Mp4 => Some(TagType::Mp4Ilst),
            Self::Generic => None,
        }
    }

    pub(crate) fn cover_replacement(self) -> CoverReplacement {
        match self {
            Self::Mpeg => CoverReplacement::FrontCovers,
            Self::Flac | Self::Mp4 | Self::Generic => CoverReplacement::AllPictures,
        }
    }

    /// Language code attached to stored lyrics, where the layer has one.
    pub(crate) fn lyrics_language(self) -> Option<[u8; 3]> {
        match self {
            Self::Mpeg => Some(*b"eng"),
            _ => None,
        }
    }

    /// MIME type recorded for a cover written with the caller's `mime` string.
    ///
    /// `ilst` only distinguishes JPEG from PNG, and only the exact string
    /// `"image/jpeg"` selects JPEG. The other layers keep the string as given.
    pub fn cover_mime(self, mime: &str) -> MimeType {
        match self {
            Self::Mp4 => {
                if mime == "image/jpeg" {
                    MimeType::Jpeg
                } else {
                    MimeType::Png
                }
            }
            _ => verbatim_mime(mime),
        }
    }
}

fn verbatim_mime(mime: &str) -> MimeType {
    match mime {
        "image/jpeg" => MimeType::Jpeg,
        "image/png" => MimeType::Png,
        "image/tiff" => MimeType::Tiff,
        "image/bmp" => MimeType::Bmp,
        "image/gif" => MimeType::Gif,
        other => MimeType::Unknown(other.to_string()),
    }
}
