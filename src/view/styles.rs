//! Color and text styling.

use ratatui::style::{Color, Modifier, Style};

/// Brand purple used for titles and headings.
pub const TITLE_COLOR: Color = Color::Rgb(0x32, 0x21, 0x53);

/// Body text grey.
pub const TEXT_COLOR: Color = Color::Rgb(0x6C, 0x6C, 0x80);

/// Action green.
pub const ACCENT_COLOR: Color = Color::Rgb(0x34, 0xCB, 0x79);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then any value of `NO_COLOR`; colors are on
    /// otherwise.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicitly enabled or disabled.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles used across screens.
///
/// With colors disabled every style keeps its modifiers (bold, reversed)
/// but drops foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen titles and point names.
    pub title: Style,
    /// Body text.
    pub text: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Section headings such as the address label.
    pub heading: Style,
    /// Focused field border.
    pub focused: Style,
    /// Unfocused field border.
    pub unfocused: Style,
    /// Primary button and footer actions.
    pub button: Style,
    /// Highlighted row in lists.
    pub highlight: Style,
    /// Alert border and title.
    pub alert: Style,
}

impl Theme {
    /// Theme for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD),
                text: Style::default().fg(TEXT_COLOR),
                muted: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                heading: Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD),
                focused: Style::default().fg(ACCENT_COLOR),
                unfocused: Style::default().fg(TEXT_COLOR),
                button: Style::default()
                    .fg(Color::White)
                    .bg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
                highlight: Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
                alert: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                text: Style::default(),
                muted: Style::default(),
                heading: Style::default().add_modifier(Modifier::BOLD),
                focused: Style::default().add_modifier(Modifier::BOLD),
                unfocused: Style::default(),
                button: Style::default().add_modifier(Modifier::REVERSED),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                alert: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(ecoleta_env)]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    #[serial(ecoleta_env)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    fn disabled_theme_has_no_colors() {
        let theme = Theme::with_color_config(ColorConfig::new(false));
        for style in [theme.title, theme.text, theme.button, theme.highlight, theme.focused] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn enabled_theme_uses_brand_palette() {
        let theme = Theme::default();
        assert_eq!(theme.title.fg, Some(TITLE_COLOR));
        assert_eq!(theme.button.bg, Some(ACCENT_COLOR));
    }
}
