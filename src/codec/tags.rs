use std::path::Path;

use lofty::file::TaggedFile;
use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag};

use super::{
    CodecError, ContainerFormat, Result, collapse, media_tag, open, save, tag_for_write,
    try_write_lyrics,
};
use crate::track::{CoverStatus, LyricsStatus, TrackRecord};

/// Read text tags, statuses and duration from `path`.
///
/// Never fails: an unreadable file yields a record with only `filename` and
/// `path` set.
pub fn read_tags(path: &Path) -> TrackRecord {
    collapse("reading tags", path, try_read_tags(path), || {
        TrackRecord::new(path)
    })
}

pub fn try_read_tags(path: &Path) -> Result<TrackRecord> {
    let format = ContainerFormat::for_path(path);

    let tagged = match open(path, true) {
        Ok(tagged) => tagged,
        Err(e @ CodecError::Parse { .. }) => {
            tracing::debug!(
                path = %path.display(),
                format = format.name(),
                "retrying without audio properties: {e}"
            );
            open(path, false)?
        }
        Err(e) => return Err(e),
    };

    let mut record = TrackRecord::new(path);
    record.duration = tagged.properties().duration().as_secs_f64();

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        read_text_fields(tag, &mut record);
    }

    let caps = format.capabilities();
    if caps.reads_cover {
        let cover = first_picture(&tagged, format, path);
        record.cover_status = CoverStatus::classify(cover);
    }
    if caps.reads_lyrics {
        if let Ok(tag) = media_tag(&tagged, format, "reading lyrics", path) {
            record.lyrics = tag
                .get_string(ItemKey::Lyrics)
                .map(str::to_string)
                .unwrap_or_default();
        }
        record.lyrics_status = LyricsStatus::classify(&record.lyrics);
    }

    Ok(record)
}

fn first_picture<'a>(tagged: &'a TaggedFile, format: ContainerFormat, path: &Path) -> &'a [u8] {
    media_tag(tagged, format, "reading cover art", path)
        .ok()
        .and_then(|tag| tag.pictures().first())
        .map(|picture| picture.data())
        .unwrap_or_default()
}

fn read_text_fields(tag: &Tag, record: &mut TrackRecord) {
    let text = |value: Option<std::borrow::Cow<'_, str>>| {
        value.map(|s| s.into_owned()).unwrap_or_default()
    };

    record.title = text(tag.title());
    record.artist = text(tag.artist());
    record.album = text(tag.album());
    record.genre = text(tag.genre());
    record.album_artist = tag
        .get_string(ItemKey::AlbumArtist)
        .map(str::to_string)
        .unwrap_or_default();
    record.year = stored_year(tag);
}

/// Leading year of the stored recording date, empty when unset or zero.
fn stored_year(tag: &Tag) -> String {
    let raw = tag
        .get_string(ItemKey::RecordingDate)
        .or_else(|| tag.get_string(ItemKey::Year));
    match raw.map(leading_year) {
        Some(year) if year != 0 => year.to_string(),
        _ => String::new(),
    }
}

fn leading_year(date: &str) -> u32 {
    let digits: String = date
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Write the record's text fields, then its lyrics when non-empty.
pub fn write_tags(path: &Path, record: &TrackRecord) -> bool {
    collapse("writing tags", path, try_write_tags(path, record).map(|()| true), || false)
}

/// Text fields set to "" are removed from the file. An empty `year` leaves the
/// stored date alone and `"0"` removes it.
///
/// The lyrics are saved in a second pass: if that pass fails the text
/// fields have already been written.
pub fn try_write_tags(path: &Path, record: &TrackRecord) -> Result<()> {
    let year = parse_year(&record.year)?;
    let format = ContainerFormat::for_path(path);

    let mut tagged = open(path, false)?;
    let tag_type = tagged.file_type().primary_tag_type();
    let tag = tag_for_write(&mut tagged, tag_type, path)?;

    set_or_remove(tag, &record.title, |t, v| t.set_title(v), |t| t.remove_title());
    set_or_remove(tag, &record.artist, |t, v| t.set_artist(v), |t| t.remove_artist());
    set_or_remove(tag, &record.album, |t, v| t.set_album(v), |t| t.remove_album());
    set_or_remove(tag, &record.genre, |t, v| t.set_genre(v), |t| t.remove_genre());
    if !record.album_artist.is_empty() {
        tag.insert_text(ItemKey::AlbumArtist, record.album_artist.clone());
    }
    match year {
        None => {}
        Some(0) => {
            tag.remove_key(ItemKey::RecordingDate);
            tag.remove_key(ItemKey::Year);
        }
        Some(year) => {
            tag.remove_key(ItemKey::Year);
            tag.insert_text(ItemKey::RecordingDate, format!("{year:04}"));
        }
    }

    save(tag, path)?;

    if !record.lyrics.is_empty() && format.capabilities().writes_lyrics {
        try_write_lyrics(path, &record.lyrics)?;
    }
    Ok(())
}

fn set_or_remove(
    tag: &mut Tag,
    value: &str,
    set: impl FnOnce(&mut Tag, String),
    remove: impl FnOnce(&mut Tag),
) {
    if value.is_empty() {
        remove(tag);
    } else {
        set(tag, value.to_string());
    }
}

fn parse_year(year: &str) -> Result<Option<u32>> {
    if year.is_empty() {
        return Ok(None);
    }
    year.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|_| CodecError::Validation {
            field: "year",
            value: year.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_validates_before_writing() {
        assert_eq!(parse_year("").unwrap(), None);
        assert_eq!(parse_year("1997").unwrap(), Some(1997));
        assert_eq!(parse_year(" 2001 ").unwrap(), Some(2001));
        assert_eq!(parse_year("0").unwrap(), Some(0));
        assert!(matches!(
            parse_year("19x7"),
            Err(CodecError::Validation { field: "year", .. })
        ));
        assert!(parse_year("-4").is_err());
    }

    #[test]
    fn leading_year_reads_date_prefixes() {
        assert_eq!(leading_year("1997"), 1997);
        assert_eq!(leading_year("1997-05-12"), 1997);
        assert_eq!(leading_year("2004-01-01T00:00:00"), 2004);
        assert_eq!(leading_year("abc"), 0);
        assert_eq!(leading_year(""), 0);
    }
}
