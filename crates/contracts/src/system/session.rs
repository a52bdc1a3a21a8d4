use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name of the built-in host theme.
pub const DEFAULT_THEME: &str = "default";

/// Host session as seen by the panel. Read-only on this side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSession {
    #[serde(default)]
    pub themes: Themes,
    #[serde(default)]
    pub selected_theme: Option<SelectedTheme>,
    #[serde(default)]
    pub language: Option<String>,
    /// Bearer token for backend calls made on behalf of the session.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Theme registry plus the host-wide theme defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Themes {
    #[serde(default = "default_theme_name")]
    pub default_theme: String,
    #[serde(default)]
    pub default_dark_theme: Option<String>,
    #[serde(default)]
    pub themes: BTreeMap<String, ThemeDefinition>,
    #[serde(default, rename = "darkMode", alias = "dark_mode")]
    pub dark_mode: bool,
}

fn default_theme_name() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for Themes {
    fn default() -> Self {
        Self {
            default_theme: default_theme_name(),
            default_dark_theme: None,
            themes: BTreeMap::new(),
            dark_mode: false,
        }
    }
}

/// One named theme: flat CSS variables plus optional per-mode overrides.
///
/// Values are kept as raw JSON. User themes come from YAML, so numbers and
/// booleans show up next to strings; they are turned into CSS text only when
/// the variables are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    #[serde(default, deserialize_with = "lenient_modes")]
    pub modes: Option<ThemeModes>,
    #[serde(flatten)]
    pub variables: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeModes {
    #[serde(default)]
    pub light: BTreeMap<String, Value>,
    #[serde(default)]
    pub dark: BTreeMap<String, Value>,
}

/// A `modes` key that is not a light/dark object is treated as absent.
fn lenient_modes<'de, D>(deserializer: D) -> Result<Option<ThemeModes>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// CSS text of a scalar theme value. Objects, arrays and nulls have none.
pub fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ThemeDefinition {
    /// Variables for the requested mode: the flat set overlaid with the mode set.
    /// Entries without a CSS representation are skipped.
    pub fn variables_for(&self, dark: bool) -> BTreeMap<String, String> {
        let mut vars: BTreeMap<String, String> = self
            .variables
            .iter()
            .filter_map(|(k, v)| css_value(v).map(|v| (k.clone(), v)))
            .collect();
        if let Some(modes) = &self.modes {
            let overrides = if dark { &modes.dark } else { &modes.light };
            vars.extend(
                overrides
                    .iter()
                    .filter_map(|(k, v)| css_value(v).map(|v| (k.clone(), v))),
            );
        }
        vars
    }
}

/// The user's theme choice. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTheme {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub dark: Option<bool>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
}

impl SelectedTheme {
    /// Explicitly chosen theme name; an empty name counts as no choice.
    pub fn theme_name(&self) -> Option<&str> {
        self.theme.as_deref().filter(|name| !name.is_empty())
    }
}
