//! Color themes for the terminal UI
//!
//! A dark and a light palette; the shell toggles between them at runtime.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which palette to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Light text on a dark terminal
    #[default]
    Dark,
    /// Dark text on a light terminal
    Light,
}

impl ThemeKind {
    /// The other palette
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

/// Colors used throughout the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Palette this theme was built from
    pub kind: ThemeKind,
    /// Background of selected entries
    pub selection_bg: Color,
    /// Foreground of selected entries
    pub selection_fg: Color,
    /// Cursor indicator and focused borders
    pub cursor: Color,
    /// Directory names
    pub directory: Color,
    /// Regular text
    pub text: Color,
    /// Success messages
    pub success: Color,
    /// Error messages and invalid input
    pub error: Color,
    /// Warnings and the confirmation dialog border
    pub warning: Color,
    /// Secondary messages
    pub info: Color,
    /// Unfocused borders
    pub border: Color,
    /// Hidden entries and inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Build the palette for `kind`
    #[must_use]
    pub const fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    /// Dark palette (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            directory: Color::LightBlue,
            text: Color::White,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Light palette
    #[must_use]
    pub const fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            selection_bg: Color::LightBlue,
            selection_fg: Color::Black,
            cursor: Color::Blue,
            directory: Color::Blue,
            text: Color::Black,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Magenta,
            info: Color::Blue,
            border: Color::Gray,
            dimmed: Color::Gray,
        }
    }

    /// Switch to the other palette
    pub fn toggle(&mut self) {
        *self = Self::from_kind(self.kind.toggled());
    }

    /// Selected entries
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Plain text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Directory entries
    #[must_use]
    pub fn directory_style(&self) -> Style {
        Style::default()
            .fg(self.directory)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor indicator, key names, and focused borders
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Error messages and the invalid location field
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Unfocused borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Hidden entries and disabled buttons
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mut theme = Theme::default();
        assert_eq!(theme.kind, ThemeKind::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::light());
        theme.toggle();
        assert_eq!(theme, Theme::dark());
    }

    #[test]
    fn test_theme_kind_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: ThemeKind,
        }
        let parsed: Wrapper = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(parsed.theme, ThemeKind::Light);
        assert_eq!(ThemeKind::Dark.to_string(), "dark");
    }
}
