//! Theme selector resolution and stylesheet URL formatting.

/// Theme used when the embedder leaves the selector unset.
pub const DEFAULT_THEME: &str = "light";

/// Sentinel for a caller-supplied stylesheet reference.
pub const CUSTOM_THEME: &str = "custom";

/// Built-in theme names shipped under the themes directory.
pub const AVAILABLE_THEMES: &[&str] = &[
    "light",
    "light_high_contrast",
    "light_protanopia",
    "light_tritanopia",
    "dark",
    "dark_high_contrast",
    "dark_protanopia",
    "dark_tritanopia",
    "dark_dimmed",
    "preferred_color_scheme",
    "transparent_dark",
    "noborder_light",
    "noborder_dark",
    "noborder_gray",
    "cobalt",
    "purple_dark",
    "gruvbox",
    "gruvbox_dark",
    "gruvbox_light",
    "fro",
    "catppuccin_latte",
    "catppuccin_frappe",
    "catppuccin_macchiato",
    "catppuccin_mocha",
    CUSTOM_THEME,
];

/// Returns whether `theme` names one of [`AVAILABLE_THEMES`].
pub fn is_available_theme(theme: &str) -> bool {
    AVAILABLE_THEMES.contains(&theme)
}

/// Resolves a theme selector to a known theme name.
///
/// An absent or empty selector resolves to [`DEFAULT_THEME`]; a recognized name is returned as-is;
/// anything else is treated as a custom stylesheet and resolves to [`CUSTOM_THEME`].
pub fn resolve_theme(theme: Option<&str>) -> &str {
    match theme {
        None | Some("") => DEFAULT_THEME,
        Some(name) if is_available_theme(name) => name,
        Some(_) => CUSTOM_THEME,
    }
}

/// Returns the stylesheet URL for a resolved theme.
///
/// Custom themes use the caller's selector verbatim; built-in themes live under `/themes`.
pub fn get_theme_url(resolved_theme: &str, theme: &str) -> String {
    theme_url_in("/themes", resolved_theme, theme)
}

pub(crate) fn theme_url_in(themes_dir: &str, resolved_theme: &str, theme: &str) -> String {
    if resolved_theme == CUSTOM_THEME {
        theme.to_string()
    } else {
        format!("{}/{resolved_theme}.css", themes_dir.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_selector_resolves_to_light() {
        assert_eq!(resolve_theme(None), "light");
        assert_eq!(resolve_theme(Some("")), "light");
    }

    #[test]
    fn every_available_theme_resolves_to_itself() {
        for theme in AVAILABLE_THEMES {
            assert_eq!(resolve_theme(Some(*theme)), *theme);
        }
    }

    #[test]
    fn unknown_selector_resolves_to_custom() {
        assert_eq!(resolve_theme(Some("totally-unknown")), CUSTOM_THEME);
        assert_eq!(
            resolve_theme(Some("https://example.com/x.css")),
            CUSTOM_THEME
        );
        // Theme names are case-sensitive.
        assert_eq!(resolve_theme(Some("Dark")), CUSTOM_THEME);
    }

    #[test]
    fn custom_theme_url_is_the_selector_itself() {
        assert_eq!(
            get_theme_url("custom", "https://example.com/x.css"),
            "https://example.com/x.css"
        );
    }

    #[test]
    fn built_in_theme_url_points_at_themes_dir() {
        assert_eq!(get_theme_url("light", "anything"), "/themes/light.css");
        assert_eq!(get_theme_url("dark_dimmed", ""), "/themes/dark_dimmed.css");
    }

    #[test]
    fn themes_dir_trailing_slash_is_not_doubled() {
        assert_eq!(
            theme_url_in("/static/themes/", "cobalt", "cobalt"),
            "/static/themes/cobalt.css"
        );
    }
}
