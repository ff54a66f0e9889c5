use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads the optional config file, then applies environment
/// variables (prefix `TAGFIX__`) on top and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TAGFIX")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unreadable or invalid.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(s) => {
                if let Err(msg) = s.validate() {
                    tracing::warn!("invalid config, using defaults: {msg}");
                    Self::default()
                } else {
                    s
                }
            }
            Err(e) => {
                tracing::warn!("failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let net = &self.network;
        if net.user_agent.trim().is_empty() {
            return Err("network.user_agent must not be empty".to_string());
        }
        for (key, url) in [
            ("network.itunes_search_url", &net.itunes_search_url),
            ("network.musicbrainz_url", &net.musicbrainz_url),
            ("network.cover_archive_url", &net.cover_archive_url),
            ("network.lrclib_url", &net.lrclib_url),
        ] {
            if url.trim().is_empty() {
                return Err(format!("{key} must not be empty"));
            }
        }
        Ok(())
    }

    /// Render the settings as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `TAGFIX_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TAGFIX_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tagfix/config.toml`
/// or `~/.config/tagfix/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tagfix").join("config.toml"))
}
