//! Help overlay listing every key binding

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SHELL_KEYS: &[(&str, &str)] = &[
    ("b", "Choose base directory"),
    ("s", "Select files"),
    ("d", "Delete selected"),
    ("D", "Delete all"),
    ("↑/↓ PgUp/PgDn", "Scroll selection"),
    ("t", "Toggle dark/light theme"),
    ("q / Esc", "Quit"),
];

const PICKER_KEYS: &[(&str, &str)] = &[
    ("Arrows", "Move cursor"),
    ("Space / click", "Select entry"),
    ("Enter / dbl-click", "Open directory, pick file"),
    ("c", "Confirm"),
    ("Esc", "Cancel"),
    ("Backspace / u", "Parent directory"),
    ("~", "Home directory"),
    ("h", "Show/hide hidden entries"),
    ("/ or Tab", "Edit location"),
];

const LOCATION_KEYS: &[(&str, &str)] = &[
    ("Type", "Edit path, follows valid directories"),
    ("Ctrl+W", "Delete path component"),
    ("Ctrl+U", "Clear"),
    ("Enter / Esc / Tab", "Back to the grid"),
];

/// Centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            Line::styled(
                format!("  {title}"),
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
        ];
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<20}"), self.theme.info_style()),
                Span::styled(*desc, self.theme.normal_style()),
            ])
        }));
        lines
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = self.section("Shell", SHELL_KEYS);
        lines.extend(self.section("Picker", PICKER_KEYS));
        lines.extend(self.section("Location field", LOCATION_KEYS));
        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = self.build_content();
        let height = u16::try_from(content.len() + 2).unwrap_or(u16::MAX);
        let [popup] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(64)])
            .flex(Flex::Center)
            .areas(popup);

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);
        Paragraph::new(content).block(block).render(popup, buf);
    }
}
