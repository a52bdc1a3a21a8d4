use contracts::domain::config_entry::ConfigEntry;
use contracts::system::session::HostSession;
use gloo_net::http::Request;

use super::KnxConfig;
use crate::shared::api_utils::api_url;
use crate::shared::error::PanelError;
use crate::shared::settings::PanelSettings;

/// Fetch the config entries registered for the panel's integration domain.
pub async fn fetch_config_entries(
    settings: &PanelSettings,
    access_token: Option<&str>,
) -> Result<Vec<ConfigEntry>, PanelError> {
    let url = format!(
        "{}?domain={}",
        api_url(settings, &settings.config_entries_path),
        urlencoding::encode(&settings.integration_domain)
    );

    let mut request = Request::get(&url);
    if let Some(token) = access_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| PanelError::ConfigurationFetch(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(PanelError::ConfigurationFetch(format!(
            "Request failed: {}",
            response.status()
        )));
    }

    response
        .json::<Vec<ConfigEntry>>()
        .await
        .map_err(|e| PanelError::ConfigurationFetch(format!("Failed to parse response: {}", e)))
}

/// First entry belonging to `domain`.
pub fn first_entry_for_domain(
    entries: Vec<ConfigEntry>,
    domain: &str,
) -> Result<ConfigEntry, PanelError> {
    entries
        .into_iter()
        .find(|entry| entry.domain == domain)
        .ok_or_else(|| PanelError::NoConfigEntry(domain.to_string()))
}

/// Load the panel configuration for `session`.
pub async fn load_config(
    settings: &PanelSettings,
    session: &HostSession,
) -> Result<KnxConfig, PanelError> {
    let entries = fetch_config_entries(settings, session.access_token.as_deref()).await?;
    let entry = first_entry_for_domain(entries, &settings.integration_domain)?;
    log::info!("loaded config entry {} ({})", entry.entry_id, entry.title);
    Ok(KnxConfig::new(session, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::config_entry::ConfigEntryState;

    fn entry(id: &str, domain: &str) -> ConfigEntry {
        ConfigEntry {
            entry_id: id.to_string(),
            domain: domain.to_string(),
            title: format!("{} entry", domain),
            state: ConfigEntryState::Loaded,
            source: None,
            disabled_by: None,
        }
    }

    #[test]
    fn test_first_entry_for_domain() {
        let found =
            first_entry_for_domain(vec![entry("a", "mqtt"), entry("b", "knx"), entry("c", "knx")], "knx")
                .unwrap();
        assert_eq!(found.entry_id, "b");
    }

    #[test]
    fn test_no_entry_is_error() {
        assert_eq!(
            first_entry_for_domain(vec![entry("a", "mqtt")], "knx"),
            Err(PanelError::NoConfigEntry("knx".to_string()))
        );
        assert!(first_entry_for_domain(Vec::new(), "knx").is_err());
    }

    #[test]
    fn test_config_language_from_session() {
        let session = HostSession {
            language: Some("de".to_string()),
            ..Default::default()
        };
        let config = KnxConfig::new(&session, entry("b", "knx"));
        assert_eq!(config.localize("group_monitor_title"), "Gruppenmonitor");

        let config = KnxConfig::new(&HostSession::default(), entry("b", "knx"));
        assert_eq!(config.language, "en");
    }
}
