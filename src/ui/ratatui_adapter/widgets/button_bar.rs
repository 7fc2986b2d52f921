//! Row of clickable buttons with key hints

use crate::ui::ratatui_adapter::state::Button;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Gap between buttons
const GAP: u16 = 2;

/// One button: the key that triggers it and what it does
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    /// Key name shown in the hint
    pub key: String,
    /// Action label
    pub label: String,
    /// Whether the button currently does anything
    pub enabled: bool,
    /// What a click on it means
    pub target: Button,
}

impl ButtonSpec {
    /// Create an enabled button
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, target: Button) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
            target,
        }
    }

    /// Set whether the button is enabled
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn spans(&self, theme: &Theme) -> Vec<Span<'_>> {
        let (key_style, label_style) = if self.enabled {
            (theme.cursor_style(), theme.normal_style())
        } else {
            (theme.dimmed_style(), theme.dimmed_style())
        };
        vec![
            Span::styled("[", theme.dimmed_style()),
            Span::styled(self.key.as_str(), key_style),
            Span::raw(" "),
            Span::styled(self.label.as_str(), label_style),
            Span::styled("]", theme.dimmed_style()),
        ]
    }

    /// Rendered width in cells
    #[must_use]
    pub fn width(&self) -> u16 {
        let width = Line::from(format!("[{} {}]", self.key, self.label)).width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

/// Horizontal row of buttons, left or right aligned
pub struct ButtonBar<'a> {
    buttons: &'a [ButtonSpec],
    theme: &'a Theme,
    right_aligned: bool,
}

impl<'a> ButtonBar<'a> {
    /// Create a left-aligned bar
    #[must_use]
    pub const fn new(buttons: &'a [ButtonSpec], theme: &'a Theme) -> Self {
        Self {
            buttons,
            theme,
            right_aligned: false,
        }
    }

    /// Align the buttons to the right edge
    #[must_use]
    pub const fn right_aligned(mut self) -> Self {
        self.right_aligned = true;
        self
    }

    /// Total width of all buttons including gaps
    #[must_use]
    pub fn total_width(buttons: &[ButtonSpec]) -> u16 {
        let gaps = u16::try_from(buttons.len().saturating_sub(1)).unwrap_or(0) * GAP;
        buttons
            .iter()
            .fold(gaps, |acc, b| acc.saturating_add(b.width()))
    }

    /// Screen area of each enabled button, for mouse hit-testing
    #[must_use]
    pub fn hit_areas(&self, area: Rect) -> Vec<(Rect, Button)> {
        let mut x = if self.right_aligned {
            area.right()
                .saturating_sub(Self::total_width(self.buttons))
                .max(area.x)
        } else {
            area.x
        };
        let mut areas = Vec::with_capacity(self.buttons.len());
        for button in self.buttons {
            let width = button.width().min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            if button.enabled {
                areas.push((Rect::new(x, area.y, width, 1), button.target));
            }
            x = x.saturating_add(button.width() + GAP);
        }
        areas
    }
}

impl Widget for ButtonBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if self.right_aligned {
            let pad = area.width.saturating_sub(Self::total_width(self.buttons));
            spans.push(Span::raw(" ".repeat(pad as usize)));
        }
        for (i, button) in self.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(GAP as usize)));
            }
            spans.extend(button.spans(self.theme));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
