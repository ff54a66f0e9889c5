use crate::config::{CoverSettings, Settings};

/// Supplies the cover preferences in effect for one resolver call.
pub trait PreferenceSource {
    fn cover_settings(&self) -> CoverSettings;
}

/// A fixed snapshot.
impl PreferenceSource for CoverSettings {
    fn cover_settings(&self) -> CoverSettings {
        self.clone()
    }
}

/// Re-reads the configuration on every call, so edits made while the
/// program runs apply to the next lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveSettings;

impl PreferenceSource for LiveSettings {
    fn cover_settings(&self) -> CoverSettings {
        Settings::load_or_default().covers
    }
}
