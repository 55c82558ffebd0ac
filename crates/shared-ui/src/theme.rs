use dioxus::prelude::*;

/// Colour scheme for each console screen.
///
/// All schemes share one dark palette and differ in the accent colour so an
/// operator can tell at a glance which console they are looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTheme {
    /// Login screen.
    #[default]
    Console,
    Leo,
    Ems,
    Dispatch,
}

pub const ALL_THEMES: &[ConsoleTheme] = &[
    ConsoleTheme::Console,
    ConsoleTheme::Leo,
    ConsoleTheme::Ems,
    ConsoleTheme::Dispatch,
];

impl ConsoleTheme {
    /// Value of the `data-theme` attribute on `<html>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleTheme::Console => "console",
            ConsoleTheme::Leo => "leo",
            ConsoleTheme::Ems => "ems",
            ConsoleTheme::Dispatch => "dispatch",
        }
    }

    /// Parse a theme key, falling back to the login scheme.
    pub fn from_key(s: &str) -> Self {
        match s {
            "leo" => ConsoleTheme::Leo,
            "ems" => ConsoleTheme::Ems,
            "dispatch" => ConsoleTheme::Dispatch,
            _ => ConsoleTheme::Console,
        }
    }
}

/// Apply `theme` to the document root whenever it changes.
///
/// Render once near the top of each screen.
#[component]
pub fn ThemeSeed(theme: ConsoleTheme) -> Element {
    use_effect(use_reactive!(|(theme,)| set_theme(theme)));

    rsx! {}
}

/// Set the active scheme on `<html data-theme=...>`.
pub fn set_theme(theme: ConsoleTheme) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.as_str()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_login_scheme() {
        assert_eq!(ConsoleTheme::default(), ConsoleTheme::Console);
    }

    #[test]
    fn key_roundtrip() {
        for theme in ALL_THEMES {
            assert_eq!(ConsoleTheme::from_key(theme.as_str()), *theme);
        }
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(ConsoleTheme::from_key("cyberpunk"), ConsoleTheme::Console);
        assert_eq!(ConsoleTheme::from_key(""), ConsoleTheme::Console);
    }
}
