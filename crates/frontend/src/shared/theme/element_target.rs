use contracts::system::session::{SelectedTheme, Themes};
use web_sys::HtmlElement;

use super::ThemeTarget;

/// Applies theme variables as CSS custom properties on a container element.
pub struct ElementThemeTarget {
    element: HtmlElement,
}

impl ElementThemeTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    fn set_property(&self, name: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(name, value) {
            log::warn!("failed to set {}: {:?}", name, e);
        }
    }
}

impl ThemeTarget for ElementThemeTarget {
    fn apply_theme(&self, themes: &Themes, theme_name: &str, options: &SelectedTheme) {
        let dark = options.dark.unwrap_or(themes.dark_mode);

        // The stock theme has no registry entry; the host's own variables apply.
        if let Some(definition) = themes.themes.get(theme_name) {
            for (key, value) in definition.variables_for(dark) {
                self.set_property(&format!("--{}", key), &value);
            }
        } else {
            log::debug!("theme '{}' not in registry, using host defaults", theme_name);
        }

        if let Some(primary) = &options.primary_color {
            self.set_property("--primary-color", primary);
        }
        if let Some(accent) = &options.accent_color {
            self.set_property("--accent-color", accent);
        }
        self.set_property("color-scheme", if dark { "dark" } else { "light" });

        // data-theme for additional styling hooks
        let _ = self.element.set_attribute("data-theme", theme_name);
    }

    fn set_background_color(&self, value: &str) {
        self.set_property("background-color", value);
    }
}
