//! Panel settings.
//!
//! The host may pass a settings object when mounting the panel; every field has a
//! default so an empty object (or none at all) yields the stock KNX panel.

use serde::{Deserialize, Serialize};

/// Page identifiers rendered in the navigation bar, in display order.
pub const TAB_PAGES: [&str; 2] = ["info", "monitor"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// URL prefix the host mounts the panel under.
    pub url_prefix: String,
    /// Page opened when the host route is empty or root.
    pub default_page: String,
    /// Integration domain used to look up the config entry.
    pub integration_domain: String,
    /// Backend origin; `None` means the window origin.
    pub api_base: Option<String>,
    pub config_entries_path: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            url_prefix: "/knx".to_string(),
            default_page: "info".to_string(),
            integration_domain: "knx".to_string(),
            api_base: None,
            config_entries_path: "/api/config/config_entries/entry".to_string(),
        }
    }
}

impl PanelSettings {
    fn prefix(&self) -> &str {
        self.url_prefix.trim_end_matches('/')
    }

    /// Full path for a page identifier: `prefix + "/" + page`.
    pub fn tab_path(&self, page: &str) -> String {
        format!("{}/{}", self.prefix(), page)
    }

    pub fn default_landing_path(&self) -> String {
        self.tab_path(&self.default_page)
    }

    /// First path segment below the panel prefix.
    ///
    /// Accepts both full (`/knx/info`) and prefix-relative (`/info`) paths, the host
    /// sends either depending on where the route came from.
    pub fn page_of<'a>(&self, path: &'a str) -> &'a str {
        let prefix = self.prefix();
        let relative = match path.strip_prefix(prefix) {
            Some(rest) if !prefix.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
            _ => path,
        };
        relative
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
    }
}
