//! Panel strings for the languages the KNX panel ships with.

const FALLBACK_LANGUAGE: &str = "en";

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    let text = match (language, key) {
        ("en", "title") => "KNX",
        ("en", "info_title") => "Info",
        ("en", "group_monitor_title") => "Group Monitor",
        ("en", "info_integration") => "Integration",
        ("en", "info_entry_id") => "Config entry",
        ("en", "info_state") => "State",
        ("en", "info_language") => "Language",
        ("en", "info_details") => "Details",
        ("en", "close") => "Close",
        ("en", "group_monitor_waiting") => "Waiting for telegrams…",
        ("en", "menu") => "Menu",

        ("de", "title") => "KNX",
        ("de", "info_title") => "Info",
        ("de", "group_monitor_title") => "Gruppenmonitor",
        ("de", "info_integration") => "Integration",
        ("de", "info_entry_id") => "Konfigurationseintrag",
        ("de", "info_state") => "Status",
        ("de", "info_language") => "Sprache",
        ("de", "info_details") => "Details",
        ("de", "close") => "Schließen",
        ("de", "group_monitor_waiting") => "Warte auf Telegramme…",
        ("de", "menu") => "Menü",

        _ => return None,
    };
    Some(text)
}

/// Localized string for `key`.
///
/// Region subtags are ignored (`de-AT` → `de`). Unknown languages fall back to
/// English, unknown keys render as the key itself.
pub fn localize(language: &str, key: &str) -> String {
    let base = language.split(['-', '_']).next().unwrap_or(language);
    lookup(base, key)
        .or_else(|| lookup(FALLBACK_LANGUAGE, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}
