//! Configuration loader and schema types.
//!
//! Settings are read-only from the crate's point of view: they are loaded
//! from an optional TOML file plus `TAGFIX__*` environment overrides and
//! never written back.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
