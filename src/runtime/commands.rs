use std::error::Error;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tagfix::codec;
use tagfix::config::Settings;
use tagfix::resolve::{HttpTransport, LiveSettings, Resolver};

use super::args::{Command, CoverCommand, LyricsCommand, mime_for};

/// Run `command`, writing its output to `out`. Returns whether the core call
/// succeeded.
pub fn execute(command: Command, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::Show { files } => {
            let records: Vec<_> = files.iter().map(|f| codec::read_tags(f)).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
            Ok(true)
        }
        Command::Set { assignments, files } => Ok(set_fields(&assignments, &files)),
        Command::Cover { action } => cover(action, out),
        Command::Releases { artist, album } => {
            let releases = resolver()?.search_releases(&artist, &album);
            writeln!(out, "{}", serde_json::to_string_pretty(&releases)?)?;
            Ok(!releases.is_empty())
        }
        Command::ReleaseCover { id, out: target } => {
            let image = resolver()?.fetch_cover_bytes(&id);
            if image.is_empty() {
                return Ok(false);
            }
            fs::write(&target, &image)?;
            writeln!(out, "{}", target.display())?;
            Ok(true)
        }
        Command::Lyrics { action } => lyrics(action, out),
        Command::Config => {
            write!(out, "{}", Settings::load_or_default().to_toml()?)?;
            Ok(true)
        }
    }
}

/// Apply `assignments` to each file in turn. Every file is attempted; the
/// result is `false` when any write failed.
fn set_fields(assignments: &[(String, String)], files: &[PathBuf]) -> bool {
    let mut all_written = true;
    for file in files {
        let mut record = codec::read_tags(file);
        for (field, value) in assignments {
            record.set_field(field, value);
        }
        if !codec::write_tags(file, &record) {
            tracing::info!(path = %file.display(), "tags not written");
            all_written = false;
        }
    }
    all_written
}

fn cover(action: CoverCommand, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
    match action {
        CoverCommand::Get { file, out: target } => {
            let image = codec::read_cover_art(&file);
            if image.is_empty() {
                tracing::info!(path = %file.display(), "no embedded cover");
                return Ok(false);
            }
            fs::write(&target, &image)?;
            writeln!(out, "{}", target.display())?;
            Ok(true)
        }
        CoverCommand::Set { file, image, mime } => {
            let mime = mime.unwrap_or_else(|| mime_for(&image).to_string());
            let bytes = fs::read(&image)?;
            Ok(codec::write_cover_art(&file, &bytes, &mime))
        }
        CoverCommand::Fetch { artist, album } => {
            match resolver()?.fetch_cover_artwork(&artist, &album) {
                Some(path) => {
                    writeln!(out, "{}", path.display())?;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}

fn lyrics(action: LyricsCommand, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
    match action {
        LyricsCommand::Get { file } => {
            let lyrics = codec::read_lyrics(&file);
            if lyrics.is_empty() {
                return Ok(false);
            }
            writeln!(out, "{lyrics}")?;
            Ok(true)
        }
        LyricsCommand::Set { file, source } => {
            let text = read_text(&source)?;
            Ok(codec::write_lyrics(&file, &text))
        }
        LyricsCommand::Search {
            artist,
            title,
            album,
        } => {
            let album = album.unwrap_or_default();
            let hits = resolver()?.search_lyrics_candidates(&artist, &title, &album);
            writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
            Ok(!hits.is_empty())
        }
    }
}

fn resolver() -> Result<Resolver<HttpTransport, LiveSettings>, Box<dyn Error>> {
    Ok(Resolver::from_settings(&Settings::load_or_default())?)
}

fn read_text(source: &str) -> std::io::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(Path::new(source))
    }
}
