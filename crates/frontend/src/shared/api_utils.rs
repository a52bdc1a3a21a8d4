//! API utilities for panel-backend communication
//!
//! The panel talks to the host backend on the host's own origin unless the settings
//! name another one.

use crate::shared::settings::PanelSettings;

/// Get the base URL for API requests
///
/// # Returns
/// - `settings.api_base` if set, without trailing slash
/// - otherwise the window origin, e.g. "http://homeassistant.local:8123"
/// - empty string if window is not available (relative requests)
pub fn api_base(settings: &PanelSettings) -> String {
    match &settings.api_base {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => window_origin(),
    }
}

fn window_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Join a base URL and an API path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&settings, "/api/config/config_entries/entry");
/// ```
pub fn api_url(settings: &PanelSettings, path: &str) -> String {
    join_url(&api_base(settings), path)
}
