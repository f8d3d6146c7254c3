/// Colour scheme of the whole page. Every colour on the page is read from the
/// custom properties returned by [`ThemeMode::tokens`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

const LIGHT_TOKENS: &[(&str, &str)] = &[
    ("--primary", "#000000"),
    ("--primary-rgb", "0, 0, 0"),
    ("--secondary", "#FFFFFF"),
    ("--text-primary", "#000000"),
    ("--text-secondary", "#FFFFFF"),
    ("--background", "#FFFFFF"),
    ("--header-bg", "rgba(255, 255, 255, 0.95)"),
    ("--header-shadow", "rgba(0, 0, 0, 0.05)"),
    ("--nav-bg", "#000000"),
    ("--nav-text", "#FFFFFF"),
    ("--tech-item-bg", "transparent"),
    ("--tech-item-hover-bg", "transparent"),
];

const DARK_TOKENS: &[(&str, &str)] = &[
    ("--primary", "#FFFFFF"),
    ("--primary-rgb", "255, 255, 255"),
    ("--secondary", "#000000"),
    ("--text-primary", "#FFFFFF"),
    ("--text-secondary", "#000000"),
    ("--background", "#000000"),
    ("--header-bg", "rgba(0, 0, 0, 0.95)"),
    ("--header-shadow", "rgba(255, 255, 255, 0.05)"),
    ("--nav-bg", "#FFFFFF"),
    ("--nav-text", "#000000"),
    ("--tech-item-bg", "rgba(255, 255, 255, 0.15)"),
    ("--tech-item-hover-bg", "rgba(255, 255, 255, 0.10)"),
];

impl ThemeMode {
    /// Picks the initial mode from the user agent's colour-scheme preference.
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label for the toggle control, describing what clicking it will do.
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub fn tokens(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Light => LIGHT_TOKENS,
            Self::Dark => DARK_TOKENS,
        }
    }

    /// Renders the tokens as an inline `style` declaration list.
    pub fn css_vars(self) -> String {
        self.tokens()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_returns() {
        let mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(mode.toggle(), ThemeMode::Dark);
        assert_eq!(mode.toggle().toggle(), mode);
    }

    #[test]
    fn test_preference() {
        assert_eq!(ThemeMode::from_preference(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(false), ThemeMode::Light);
    }

    #[test]
    fn test_token_sets_cover_same_names() {
        let light = ThemeMode::Light.tokens();
        let dark = ThemeMode::Dark.tokens();
        assert_eq!(light.len(), dark.len());
        for ((l, _), (d, _)) in light.iter().zip(dark.iter()) {
            assert_eq!(l, d);
        }
    }

    #[test]
    fn test_css_vars() {
        let vars = ThemeMode::Dark.css_vars();
        assert!(vars.starts_with("--primary: #FFFFFF;"));
        assert!(vars.contains("--background: #000000;"));
        assert!(ThemeMode::Light.css_vars().contains("--background: #FFFFFF;"));
    }

    #[test]
    fn test_aria_label_describes_next_mode() {
        assert_eq!(ThemeMode::Light.aria_label(), "Switch to dark mode");
        assert_eq!(ThemeMode::Dark.aria_label(), "Switch to light mode");
    }
}
