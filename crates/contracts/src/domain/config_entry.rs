use serde::{Deserialize, Serialize};

/// Lifecycle state of an integration config entry on the host backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigEntryState {
    Loaded,
    SetupError,
    MigrationError,
    SetupRetry,
    NotLoaded,
    FailedUnload,
    SetupInProgress,
    #[serde(other)]
    Unknown,
}

impl ConfigEntryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigEntryState::Loaded => "loaded",
            ConfigEntryState::SetupError => "setup_error",
            ConfigEntryState::MigrationError => "migration_error",
            ConfigEntryState::SetupRetry => "setup_retry",
            ConfigEntryState::NotLoaded => "not_loaded",
            ConfigEntryState::FailedUnload => "failed_unload",
            ConfigEntryState::SetupInProgress => "setup_in_progress",
            ConfigEntryState::Unknown => "unknown",
        }
    }
}

/// Config entry as returned by `GET /api/config/config_entries/entry?domain=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub domain: String,
    pub title: String,
    pub state: ConfigEntryState,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub disabled_by: Option<String>,
}
