//! Core of an audio tag editor.
//!
//! - [`codec`] reads and writes embedded text tags, cover art and lyrics in
//!   MP3, FLAC and M4A files, with text-only support for other formats.
//! - [`track`] holds the editable record and the cover/lyrics classifiers.
//! - [`resolve`] looks up cover art, releases and lyrics online.
//! - [`config`] loads user preferences.

pub mod codec;
pub mod config;
pub mod resolve;
pub mod track;
