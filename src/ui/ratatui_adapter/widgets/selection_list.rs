//! The shell's list of selected paths

use crate::fs;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};
use std::path::{Path, PathBuf};

/// Scrollable list of selected paths, shown relative to the base directory
pub struct SelectionList<'a> {
    paths: &'a [PathBuf],
    base_dir: &'a Path,
    scroll: usize,
    theme: &'a Theme,
    title: String,
}

impl<'a> SelectionList<'a> {
    /// Create a selection list widget
    #[must_use]
    pub fn new(paths: &'a [PathBuf], base_dir: &'a Path, scroll: usize, theme: &'a Theme) -> Self {
        Self {
            paths,
            base_dir,
            scroll,
            theme,
            title: format!(" Selected ({}) ", paths.len()),
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Rows available for entries inside `area`
    #[must_use]
    pub fn visible_rows(area: Rect) -> usize {
        usize::from(Block::default().borders(Borders::ALL).inner(area).height)
    }
}

impl Widget for SelectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.paths.is_empty() {
            Paragraph::new(Line::styled(
                "Nothing selected. Press s to select files.",
                self.theme.dimmed_style(),
            ))
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .paths
            .iter()
            .skip(self.scroll)
            .take(usize::from(inner.height))
            .map(|path| {
                let style = if path.exists() {
                    self.theme.normal_style()
                } else {
                    self.theme.error_style()
                };
                ListItem::new(Line::styled(fs::display_relative(path, self.base_dir), style))
            })
            .collect();
        List::new(items).render(inner, buf);
    }
}
