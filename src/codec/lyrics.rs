use std::path::Path;

use lofty::tag::{ItemKey, ItemValue, TagItem};

use super::{
    CodecError, ContainerFormat, Result, collapse, media_tag, open, require, save, tag_for_write,
};

/// Embedded lyrics text, empty when there is none.
pub fn read_lyrics(path: &Path) -> String {
    collapse("reading lyrics", path, try_read_lyrics(path), String::new)
}

pub fn try_read_lyrics(path: &Path) -> Result<String> {
    let format = ContainerFormat::for_path(path);
    require(format.capabilities().reads_lyrics, "reading lyrics", path)?;

    let tagged = open(path, false)?;
    let tag = media_tag(&tagged, format, "reading lyrics", path)?;
    tag.get_string(ItemKey::Lyrics)
        .map(str::to_string)
        .ok_or_else(|| CodecError::NotFound(format!("lyrics in {}", path.display())))
}

/// Replace the stored lyrics with `text`. An empty `text` removes them.
pub fn write_lyrics(path: &Path, text: &str) -> bool {
    let result = try_write_lyrics(path, text).map(|()| true);
    collapse("writing lyrics", path, result, || false)
}

pub fn try_write_lyrics(path: &Path, text: &str) -> Result<()> {
    let format = ContainerFormat::for_path(path);
    require(format.capabilities().writes_lyrics, "writing lyrics", path)?;
    let tag_type = format
        .media_tag_type()
        .ok_or_else(|| CodecError::unsupported("writing lyrics", path))?;

    let mut tagged = open(path, false)?;
    let tag = tag_for_write(&mut tagged, tag_type, path)?;

    tag.remove_key(ItemKey::Lyrics);
    if !text.is_empty() {
        let mut item = TagItem::new(ItemKey::Lyrics, ItemValue::Text(text.to_string()));
        if let Some(lang) = format.lyrics_language() {
            item.set_lang(lang);
        }
        tag.insert(item);
    }

    save(tag, path)
}
