//! Embedded metadata access for audio files.
//!
//! Every operation comes in two forms. `try_*` returns a [`CodecError`] that
//! says why it failed. The plain form logs the failure and collapses it into
//! an empty value or `false`, which is what batch callers want: one broken
//! file must not stop a scan.

use std::path::Path;

use lofty::config::{ParseOptions, ParsingMode, WriteOptions};
use lofty::file::TaggedFile;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};

mod cover;
mod error;
mod format;
mod lyrics;
mod tags;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cover::{read_cover_art, try_read_cover_art, try_write_cover_art, write_cover_art};
pub use error::{CodecError, Result};
pub use format::{Capabilities, ContainerFormat};
pub use lyrics::{read_lyrics, try_read_lyrics, try_write_lyrics, write_lyrics};
pub use tags::{read_tags, try_read_tags, try_write_tags, write_tags};

/// Open and parse `path`. Audio properties are decoded only when asked for.
pub(crate) fn open(path: &Path, read_properties: bool) -> Result<TaggedFile> {
    std::fs::metadata(path).map_err(|e| CodecError::io(path, e))?;

    Probe::open(path)
        .map_err(|e| CodecError::parse(path, e))?
        .options(
            ParseOptions::new()
                .read_properties(read_properties)
                .parsing_mode(ParsingMode::BestAttempt),
        )
        .guess_file_type()
        .map_err(|e| CodecError::io(path, e))?
        .read()
        .map_err(|e| CodecError::parse(path, e))
}

/// The tag of type `tag_type`, created empty when the file has none.
pub(crate) fn tag_for_write<'a>(
    tagged: &'a mut TaggedFile,
    tag_type: TagType,
    path: &Path,
) -> Result<&'a mut Tag> {
    if tagged.tag(tag_type).is_none() {
        tagged.insert_tag(Tag::new(tag_type));
    }
    tagged
        .tag_mut(tag_type)
        .ok_or_else(|| CodecError::unsupported("writing tags", path))
}

pub(crate) fn save(tag: &Tag, path: &Path) -> Result<()> {
    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| CodecError::save(path, e))
}

/// Media tag layer of a capable format, or `NotFound` when the file has none.
pub(crate) fn media_tag<'a>(
    tagged: &'a TaggedFile,
    format: ContainerFormat,
    operation: &'static str,
    path: &Path,
) -> Result<&'a Tag> {
    let tag_type = format
        .media_tag_type()
        .ok_or_else(|| CodecError::unsupported(operation, path))?;
    tagged
        .tag(tag_type)
        .ok_or_else(|| CodecError::NotFound(format!("{tag_type:?} tag in {}", path.display())))
}

/// Ensure `format` supports an operation before the file is touched.
pub(crate) fn require(
    supported: bool,
    operation: &'static str,
    path: &Path,
) -> Result<()> {
    if supported {
        Ok(())
    } else {
        Err(CodecError::unsupported(operation, path))
    }
}

/// Log a failed operation and substitute `fallback`.
pub(crate) fn collapse<T>(
    operation: &'static str,
    path: &Path,
    result: Result<T>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            if e.is_not_found() {
                tracing::debug!(path = %path.display(), "{operation}: {e}");
            } else {
                tracing::warn!(path = %path.display(), "{operation} failed: {e}");
            }
            fallback()
        }
    }
}
