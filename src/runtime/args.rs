use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

/// Fields `set` accepts.
const EDITABLE_FIELDS: &[&str] = &[
    "title",
    "artist",
    "album",
    "album_artist",
    "albumartist",
    "genre",
    "year",
    "lyrics",
];

#[derive(Debug, Parser)]
#[command(name = "tagfix", version)]
#[command(about = "Edit embedded tags, cover art and lyrics, and look them up online")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print tags as JSON
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Apply the same field=value edits to every file after `--`
    Set {
        /// title, artist, album, album_artist, genre, year or lyrics
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,
        #[arg(last = true, required = true)]
        files: Vec<PathBuf>,
    },
    /// Embedded cover art and online artwork
    Cover {
        #[command(subcommand)]
        action: CoverCommand,
    },
    /// List matching releases as JSON
    Releases { artist: String, album: String },
    /// Save a release's front cover
    ReleaseCover { id: String, out: PathBuf },
    /// Embedded lyrics and online lyrics search
    Lyrics {
        #[command(subcommand)]
        action: LyricsCommand,
    },
    /// Print effective settings
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CoverCommand {
    /// Save the embedded cover
    Get { file: PathBuf, out: PathBuf },
    /// Embed a cover
    Set {
        file: PathBuf,
        image: PathBuf,
        /// Defaults to image/png for a .png image, image/jpeg otherwise
        mime: Option<String>,
    },
    /// Download artwork and print its path
    Fetch { artist: String, album: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum LyricsCommand {
    /// Print embedded lyrics
    Get { file: PathBuf },
    /// Embed lyrics from a text file, or stdin for `-`
    Set { file: PathBuf, source: String },
    /// List lyrics matches as JSON
    Search {
        artist: String,
        title: String,
        album: Option<String>,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("expected field=value, got {0:?}")]
    Malformed(String),
    #[error("unknown field {0:?}")]
    UnknownField(String),
}

fn parse_assignment(arg: &str) -> Result<(String, String), AssignmentError> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| AssignmentError::Malformed(arg.to_string()))?;
    if !EDITABLE_FIELDS.contains(&field) {
        return Err(AssignmentError::UnknownField(field.to_string()));
    }
    Ok((field.to_string(), value.to_string()))
}

/// MIME type guessed from an image file name, JPEG unless it says PNG.
pub fn mime_for(image: &Path) -> &'static str {
    let ext = image
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}
