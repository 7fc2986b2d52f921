//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar showing the latest message and a right-hand indicator
pub struct StatusBar<'a> {
    message: Option<&'a (MessageLevel, String)>,
    indicator: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a (MessageLevel, String)>,
        indicator: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            indicator,
            theme,
        }
    }

    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let indicator_width = u16::try_from(self.indicator.len()).unwrap_or(0);
        let [left, right] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(indicator_width)])
                .areas(inner);

        if let Some((level, text)) = self.message {
            let style = self.style_for_level(*level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.indicator, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
