//! Grid of directory entries
//!
//! Entries flow left to right, then top to bottom, in fixed-width cells.
//! Directories carry a marker and a trailing separator; hidden entries are
//! dimmed; selected entries are highlighted.

use crate::fs::Entry;
use crate::picker::Selection;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of one grid cell in terminal columns
pub const CELL_WIDTH: u16 = 24;

/// Entry grid widget
pub struct EntryGrid<'a> {
    entries: &'a [Entry],
    selection: &'a Selection,
    cursor: usize,
    scroll_row: usize,
    theme: &'a Theme,
    title: String,
}

impl<'a> EntryGrid<'a> {
    /// Create an entry grid
    #[must_use]
    pub fn new(
        entries: &'a [Entry],
        selection: &'a Selection,
        cursor: usize,
        scroll_row: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entries,
            selection,
            cursor,
            scroll_row,
            theme,
            title: format!(" {} entries ", entries.len()),
        }
    }

    /// Area inside the grid's border
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Columns that fit in `width`
    #[must_use]
    pub fn columns_for(width: u16) -> usize {
        usize::from((width / CELL_WIDTH).max(1))
    }

    /// Screen cell of entry `index`, if it is scrolled into view
    #[must_use]
    pub fn cell_rect(inner: Rect, scroll_row: usize, index: usize) -> Option<Rect> {
        let columns = Self::columns_for(inner.width);
        let row = (index / columns).checked_sub(scroll_row)?;
        let column = index % columns;
        let y = inner.y.checked_add(u16::try_from(row).ok()?)?;
        if y >= inner.bottom() {
            return None;
        }
        let x = inner.x + u16::try_from(column).ok()? * CELL_WIDTH;
        let width = CELL_WIDTH.min(inner.right().saturating_sub(x));
        Some(Rect::new(x, y, width, 1))
    }

    fn label(entry: &Entry, width: usize) -> String {
        let mut name = entry.name.clone();
        if entry.is_dir {
            name.push(std::path::MAIN_SEPARATOR);
        }
        // marker + space, and one column of padding on the right
        let room = width.saturating_sub(3);
        if name.chars().count() > room {
            let kept: String = name.chars().take(room.saturating_sub(1)).collect();
            name = format!("{kept}…");
        }
        let marker = if entry.is_dir { '▸' } else { ' ' };
        format!("{marker} {name}")
    }

    fn entry_style(&self, entry: &Entry, is_cursor: bool) -> Style {
        let base = if self.selection.contains(&entry.path) {
            self.theme.selected_style()
        } else if entry.is_hidden() {
            self.theme.dimmed_style()
        } else if entry.is_dir {
            self.theme.directory_style()
        } else {
            self.theme.normal_style()
        };
        if is_cursor {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for EntryGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Line::styled("(empty)", self.theme.dimmed_style())).render(inner, buf);
            return;
        }

        for (index, entry) in self.entries.iter().enumerate() {
            let Some(cell) = Self::cell_rect(inner, self.scroll_row, index) else {
                continue;
            };
            let style = self.entry_style(entry, index == self.cursor);
            let label = Self::label(entry, usize::from(cell.width));
            Paragraph::new(Line::from(Span::styled(label, style))).render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(PathBuf::from("/t/docs"), true),
            Entry::new(PathBuf::from("/t/.env"), false),
            Entry::new(PathBuf::from("/t/readme.txt"), false),
        ]
    }

    #[test]
    fn test_columns_for() {
        assert_eq!(EntryGrid::columns_for(10), 1);
        assert_eq!(EntryGrid::columns_for(48), 2);
        assert_eq!(EntryGrid::columns_for(71), 2);
    }

    #[test]
    fn test_cell_rect_flows_by_rows() {
        let inner = Rect::new(1, 1, 48, 2);
        assert_eq!(EntryGrid::cell_rect(inner, 0, 0), Some(Rect::new(1, 1, 24, 1)));
        assert_eq!(EntryGrid::cell_rect(inner, 0, 1), Some(Rect::new(25, 1, 24, 1)));
        assert_eq!(EntryGrid::cell_rect(inner, 0, 2), Some(Rect::new(1, 2, 24, 1)));
        // Row 2 is below the visible area
        assert_eq!(EntryGrid::cell_rect(inner, 0, 4), None);
        // Scrolled past row 0
        assert_eq!(EntryGrid::cell_rect(inner, 1, 0), None);
        assert_eq!(EntryGrid::cell_rect(inner, 1, 4), Some(Rect::new(1, 2, 24, 1)));
    }

    #[test]
    fn test_label_truncates_long_names() {
        let entry = Entry::new(PathBuf::from("/t/a-very-long-file-name-indeed.txt"), false);
        let label = EntryGrid::label(&entry, 24);
        assert_eq!(label.chars().count(), 23);
        assert!(label.ends_with('…'));

        let dir = Entry::new(PathBuf::from("/t/docs"), true);
        assert_eq!(
            EntryGrid::label(&dir, 24),
            format!("▸ docs{}", std::path::MAIN_SEPARATOR)
        );
    }

    #[test]
    fn test_render_styles() {
        let theme = Theme::default();
        let entries = entries();
        let selection = Selection::from_paths([PathBuf::from("/t/readme.txt")]);
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        EntryGrid::new(&entries, &selection, 0, 0, &theme).render(area, &mut buf);

        // docs at (1,1): directory, under the cursor
        assert_eq!(buf[(3, 1)].symbol(), "d");
        assert_eq!(buf[(3, 1)].fg, theme.directory);
        assert!(buf[(3, 1)].modifier.contains(Modifier::REVERSED));
        // .env at (25,1): hidden
        assert_eq!(buf[(27, 1)].symbol(), ".");
        assert_eq!(buf[(27, 1)].fg, theme.dimmed);
        // readme.txt at (49,1): selected
        assert_eq!(buf[(51, 1)].symbol(), "r");
        assert_eq!(buf[(51, 1)].bg, theme.selection_bg);
    }

    #[test]
    fn test_render_empty() {
        let theme = Theme::default();
        let selection = Selection::new();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        EntryGrid::new(&[], &selection, 0, 0, &theme).render(area, &mut buf);
        assert_eq!(buf[(1, 1)].symbol(), "(");
    }
}
