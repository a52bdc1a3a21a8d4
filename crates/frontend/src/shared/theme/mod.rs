//! Theme handling for the panel.
//!
//! Resolution is a pure function of the host session (`resolve_theme`); applying it
//! goes through a [`ThemeTarget`], the container the panel is mounted in. The
//! browser implementation lives in `element_target`.

mod element_target;

pub use element_target::ElementThemeTarget;

use contracts::system::session::{HostSession, SelectedTheme, Themes};

/// Background pushed onto the container after every theme application. Theme
/// variables alone do not repaint an ancestor that already has a background.
pub const CONTAINER_BACKGROUND: &str = "var(--primary-background-color)";

/// Result of theme resolution, ready to hand to the styling engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOutput {
    pub theme_name: String,
    pub options: SelectedTheme,
}

impl ThemeOutput {
    pub fn is_dark(&self) -> bool {
        self.options.dark.unwrap_or(false)
    }
}

/// Styling boundary the panel applies its theme to.
pub trait ThemeTarget {
    fn apply_theme(&self, themes: &Themes, theme_name: &str, options: &SelectedTheme);
    fn set_background_color(&self, value: &str);
}

/// Resolve theme name and options from the session's theme state.
///
/// Name: explicit selection, else the default dark theme while dark mode is on,
/// else the default theme. Options are always an owned copy of the selection with
/// `dark` forced to the session's dark-mode flag.
pub fn resolve_theme(themes: &Themes, selected: Option<&SelectedTheme>) -> ThemeOutput {
    let theme_name = selected
        .and_then(SelectedTheme::theme_name)
        .or_else(|| {
            themes
                .default_dark_theme
                .as_deref()
                .filter(|name| themes.dark_mode && !name.is_empty())
        })
        .unwrap_or(themes.default_theme.as_str())
        .to_string();

    // Always an owned copy, including the stock-theme case without an explicit dark
    // flag, so forcing `dark` below never leaks back into the session.
    let mut options = selected.cloned().unwrap_or_default();
    options.dark = Some(themes.dark_mode);

    ThemeOutput {
        theme_name,
        options,
    }
}

/// Push a resolved theme to `target`, then repaint its background.
pub fn apply_theme_output<T: ThemeTarget + ?Sized>(target: &T, themes: &Themes, output: &ThemeOutput) {
    target.apply_theme(themes, &output.theme_name, &output.options);
    target.set_background_color(CONTAINER_BACKGROUND);
}

/// Resolve and apply the session's theme in one go.
pub fn apply_session_theme<T: ThemeTarget + ?Sized>(target: &T, session: &HostSession) -> ThemeOutput {
    let output = resolve_theme(&session.themes, session.selected_theme.as_ref());
    log::debug!(
        "applying theme '{}' (dark: {})",
        output.theme_name,
        output.is_dark()
    );
    apply_theme_output(target, &session.themes, &output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::session::DEFAULT_THEME;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTarget {
        calls: RefCell<Vec<String>>,
    }

    impl ThemeTarget for RecordingTarget {
        fn apply_theme(&self, _themes: &Themes, theme_name: &str, options: &SelectedTheme) {
            self.calls
                .borrow_mut()
                .push(format!("theme:{}:{:?}", theme_name, options.dark));
        }

        fn set_background_color(&self, value: &str) {
            self.calls.borrow_mut().push(format!("background:{}", value));
        }
    }

    fn themes(dark_mode: bool, default_dark: Option<&str>) -> Themes {
        Themes {
            default_theme: DEFAULT_THEME.to_string(),
            default_dark_theme: default_dark.map(str::to_string),
            dark_mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_dark_default_theme_without_selection() {
        let output = resolve_theme(&themes(true, Some("dark1")), None);
        assert_eq!(output.theme_name, "dark1");
        assert_eq!(output.options.dark, Some(true));
    }

    #[test]
    fn test_default_theme_options_are_copy_with_forced_dark() {
        let selected = SelectedTheme {
            theme: Some("default".to_string()),
            dark: None,
            primary_color: Some("#03a9f4".to_string()),
            accent_color: None,
        };
        let output = resolve_theme(&themes(false, Some("dark1")), Some(&selected));

        assert_eq!(output.theme_name, "default");
        assert_eq!(
            output.options,
            SelectedTheme {
                dark: Some(false),
                ..selected.clone()
            }
        );
        // the session's own selection is untouched
        assert_eq!(selected.dark, None);
    }

    #[test]
    fn test_explicit_selection_wins_over_dark_default() {
        let selected = SelectedTheme {
            theme: Some("solarized".to_string()),
            dark: Some(false),
            ..Default::default()
        };
        let output = resolve_theme(&themes(true, Some("dark1")), Some(&selected));
        assert_eq!(output.theme_name, "solarized");
        // stale per-theme flag is overridden by the session's dark mode
        assert_eq!(output.options.dark, Some(true));
    }

    #[test]
    fn test_light_mode_ignores_dark_default() {
        let output = resolve_theme(&themes(false, Some("dark1")), None);
        assert_eq!(output.theme_name, "default");
        assert_eq!(output.options.dark, Some(false));
    }

    #[test]
    fn test_empty_selection_name_falls_through() {
        let selected = SelectedTheme {
            theme: Some(String::new()),
            ..Default::default()
        };
        let output = resolve_theme(&themes(true, Some("dark1")), Some(&selected));
        assert_eq!(output.theme_name, "dark1");
    }

    #[test]
    fn test_apply_sets_background_after_theme() {
        let target = RecordingTarget::default();
        let session = HostSession {
            themes: themes(true, Some("dark1")),
            ..Default::default()
        };
        let output = apply_session_theme(&target, &session);
        assert_eq!(output.theme_name, "dark1");
        assert_eq!(
            *target.calls.borrow(),
            vec![
                "theme:dark1:Some(true)".to_string(),
                format!("background:{}", CONTAINER_BACKGROUND),
            ]
        );
    }
}
