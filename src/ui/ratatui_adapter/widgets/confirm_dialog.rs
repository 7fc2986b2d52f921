//! Confirmation dialog widget for destructive actions
//!
//! A centered modal with the prompt message, up to three context lines
//! (affected paths), and Yes/No buttons.

use crate::app::ConfirmPrompt;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Context lines shown before the rest is summarised
const MAX_CONTEXT_LINES: usize = 3;

const YES_LABEL: &str = " [Y] Yes ";
const NO_LABEL: &str = " [N] No ";
const BUTTON_GAP: u16 = 4;

/// Screen areas of the dialog, shared by rendering and hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmLayout {
    /// Whole modal including border
    pub modal: Rect,
    /// Message row
    pub message: Rect,
    /// Context rows (zero height without context)
    pub context: Rect,
    /// Yes button
    pub yes: Rect,
    /// No button
    pub no: Rect,
    /// Key help row
    pub help: Rect,
}

/// Confirmation dialog overlay widget
pub struct ConfirmDialog<'a> {
    prompt: &'a ConfirmPrompt,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a confirmation dialog widget
    #[must_use]
    pub const fn new(prompt: &'a ConfirmPrompt, theme: &'a Theme) -> Self {
        Self { prompt, theme }
    }

    fn context_rows(prompt: &ConfirmPrompt) -> u16 {
        match prompt.context.len() {
            0 => 0,
            n if n > MAX_CONTEXT_LINES => 2 + MAX_CONTEXT_LINES as u16,
            n => 1 + u16::try_from(n).unwrap_or(0),
        }
    }

    /// Compute the dialog's areas inside `area`
    #[must_use]
    pub fn layout(prompt: &ConfirmPrompt, area: Rect) -> ConfirmLayout {
        let message_width = u16::try_from(prompt.message.chars().count()).unwrap_or(u16::MAX);
        let width = message_width
            .saturating_add(4)
            .clamp(40, 72)
            .min(area.width.saturating_sub(4).max(1));
        let context_rows = Self::context_rows(prompt);
        let height = (7 + context_rows).min(area.height);

        let modal = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width.min(area.width),
            height,
        );
        let inner = Block::default().borders(Borders::ALL).inner(modal);
        let [_, message, context, _, buttons, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(context_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let yes_width = YES_LABEL.len() as u16;
        let no_width = NO_LABEL.len() as u16;
        let total = yes_width + BUTTON_GAP + no_width;
        let start = buttons.x + buttons.width.saturating_sub(total) / 2;
        let yes = Rect::new(start, buttons.y, yes_width, buttons.height).intersection(buttons);
        let no = Rect::new(start + yes_width + BUTTON_GAP, buttons.y, no_width, buttons.height)
            .intersection(buttons);

        ConfirmLayout {
            modal,
            message,
            context,
            yes,
            no,
            help,
        }
    }

    fn context_lines(&self, width: usize) -> Vec<Line<'a>> {
        if self.prompt.context.is_empty() {
            return Vec::new();
        }
        let room = width.saturating_sub(6);
        let mut lines = vec![Line::styled(
            "─".repeat(width.saturating_sub(2)),
            self.theme.dimmed_style(),
        )];
        for item in self.prompt.context.iter().take(MAX_CONTEXT_LINES) {
            let count = item.chars().count();
            let display = if count > room {
                let tail: String = item.chars().skip(count - room + 1).collect();
                format!("…{tail}")
            } else {
                item.clone()
            };
            lines.push(Line::from(format!("  • {display}")));
        }
        let rest = self.prompt.context.len().saturating_sub(MAX_CONTEXT_LINES);
        if rest > 0 {
            lines.push(Line::from(format!("  … and {rest} more")));
        }
        lines
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Self::layout(self.prompt, area);

        Clear.render(layout.modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.warning_style().add_modifier(Modifier::BOLD))
            .title(format!(" {} ", self.prompt.title))
            .title_alignment(Alignment::Center);
        block.render(layout.modal, buf);

        Paragraph::new(self.prompt.message.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.normal_style())
            .render(layout.message, buf);

        Paragraph::new(self.context_lines(usize::from(layout.context.width)))
            .style(self.theme.dimmed_style())
            .render(layout.context, buf);

        let yes_style = Style::default()
            .fg(Color::Black)
            .bg(self.theme.error)
            .add_modifier(Modifier::BOLD);
        let no_style = Style::default()
            .fg(Color::Black)
            .bg(self.theme.success)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled(YES_LABEL, yes_style))).render(layout.yes, buf);
        Paragraph::new(Line::from(Span::styled(NO_LABEL, no_style))).render(layout.no, buf);

        Paragraph::new("Y/Enter: confirm | N/Esc: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(layout.help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ConfirmKind;

    fn prompt(context: usize) -> ConfirmPrompt {
        ConfirmPrompt::new(ConfirmKind::DeleteSelected, "Delete selected", "Delete 2 selected item(s)?")
            .with_context((0..context).map(|i| format!("file{i}.txt")).collect())
    }

    #[test]
    fn test_layout_is_centered_and_buttons_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = ConfirmDialog::layout(&prompt(0), area);

        assert_eq!(layout.modal.width, 40);
        assert_eq!(layout.modal.height, 7);
        assert_eq!(layout.modal.x, 30);
        assert!(layout.modal.contains(layout.yes.as_position()));
        assert!(layout.modal.contains(layout.no.as_position()));
        assert!(layout.yes.right() < layout.no.x);
        assert_eq!(layout.yes.y, layout.no.y);
    }

    #[test]
    fn test_layout_grows_with_context() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(ConfirmDialog::layout(&prompt(2), area).modal.height, 10);
        assert_eq!(ConfirmDialog::layout(&prompt(10), area).modal.height, 12);
    }

    #[test]
    fn test_render_shows_message_and_overflow() {
        let theme = Theme::default();
        let prompt = prompt(5);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ConfirmDialog::new(&prompt, &theme).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Delete 2 selected item(s)?"));
        assert!(text.contains("file0.txt"));
        assert!(!text.contains("file3.txt"));
        assert!(text.contains("and 2 more"));
        assert!(text.contains("[Y] Yes"));
    }
}
