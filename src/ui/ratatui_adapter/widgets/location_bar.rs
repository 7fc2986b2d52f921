//! Location field widget
//!
//! Shows the picker's editable path. Invalid text (not an existing
//! directory) is drawn in the error colour and kept as typed.

use crate::picker::LocationField;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered single-line path input
pub struct LocationBar<'a> {
    field: &'a LocationField,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> LocationBar<'a> {
    /// Create a location bar widget
    #[must_use]
    pub const fn new(field: &'a LocationField, theme: &'a Theme) -> Self {
        Self {
            field,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LocationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if !self.field.valid {
            self.theme.error_style()
        } else if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };
        let title = if self.field.valid {
            " Location "
        } else {
            " Location (not a directory) "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = if self.field.valid {
            self.theme.normal_style()
        } else {
            self.theme.error_style()
        };

        let line = if self.focused {
            let split = self
                .field
                .text
                .char_indices()
                .nth(self.field.cursor)
                .map_or(self.field.text.len(), |(i, _)| i);
            let (before, after) = self.field.text.split_at(split);
            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled("│", self.theme.cursor_style().add_modifier(Modifier::SLOW_BLINK)),
                Span::styled(after, text_style),
            ])
        } else {
            Line::styled(self.field.text.as_str(), text_style)
        };

        // Keep the end of long paths visible
        let overflow = line.width().saturating_sub(inner.width as usize);
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
        Paragraph::new(line).scroll((0, scroll)).render(inner, buf);
    }
}
