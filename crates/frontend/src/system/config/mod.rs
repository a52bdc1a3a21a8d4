pub mod api;

use contracts::domain::config_entry::ConfigEntry;
use contracts::system::session::HostSession;

use crate::shared::localize::localize;

/// Panel configuration: the integration's config entry plus the language the panel
/// renders in. Fetched once per mount and not changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct KnxConfig {
    pub language: String,
    pub config_entry: ConfigEntry,
}

impl KnxConfig {
    pub fn new(session: &HostSession, config_entry: ConfigEntry) -> Self {
        Self {
            language: session
                .language
                .clone()
                .unwrap_or_else(|| "en".to_string()),
            config_entry,
        }
    }

    pub fn localize(&self, key: &str) -> String {
        localize(&self.language, key)
    }
}
