//! Presentation state for the terminal UI
//!
//! Everything here is about how things are drawn: theme, status messages,
//! scroll offsets, keyboard focus, and the click map rebuilt on every frame.
//! Application data lives in [`crate::app::AppState`].

use crate::ui::output::StatusBarWriter;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use std::time::Duration;

/// Current overlay mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal input routing
    #[default]
    Normal,
    /// Help overlay is visible; any key closes it
    Help,
}

/// Clickable controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Shell: open the base directory picker
    ChooseBase,
    /// Shell: open the file picker
    SelectFiles,
    /// Shell: delete the selection
    DeleteSelected,
    /// Shell: open the delete-all warning
    DeleteAll,
    /// Switch dark/light theme
    ToggleTheme,
    /// Show the help overlay
    Help,
    /// Leave the shell
    Quit,
    /// Picker: go to the parent directory
    Up,
    /// Picker: go to the home directory
    Home,
    /// Picker: show or hide dot-prefixed entries
    ToggleHidden,
    /// Picker: focus the location field
    Location,
    /// Picker: cancel
    Cancel,
    /// Picker: confirm
    Confirm,
    /// Confirmation dialog: accept
    Yes,
    /// Confirmation dialog: decline
    No,
}

/// What lies under a mouse position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// A button
    Button(Button),
    /// A picker grid cell
    Entry(PathBuf),
}

/// Screen regions that react to clicks, rebuilt on every draw
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Forget all regions
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a region; later regions are drawn on top
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// Register button regions
    pub fn extend_buttons(&mut self, areas: impl IntoIterator<Item = (Rect, Button)>) {
        self.regions.extend(
            areas
                .into_iter()
                .map(|(area, button)| (area, HitTarget::Button(button))),
        );
    }

    /// Topmost target at a terminal cell
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }
}

/// Layout and focus of the picker currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerView {
    /// Keys go to the location field
    pub location_focused: bool,
    /// First visible grid row
    pub scroll_row: usize,
    /// Grid columns at the last draw
    pub columns: usize,
    /// Visible grid rows at the last draw
    pub rows: usize,
}

impl Default for PickerView {
    fn default() -> Self {
        Self {
            location_focused: false,
            scroll_row: 0,
            columns: 1,
            rows: 1,
        }
    }
}

impl PickerView {
    /// Scroll so that entry `cursor` is visible
    pub fn scroll_to(&mut self, cursor: usize) {
        let columns = self.columns.max(1);
        let rows = self.rows.max(1);
        let row = cursor / columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    /// Entries per page
    #[must_use]
    pub fn page_len(&self) -> usize {
        self.columns.max(1) * self.rows.max(1)
    }
}

/// Presentation state shared by the shell and the standalone picker
#[derive(Debug)]
pub struct UiState {
    /// Current overlay mode
    pub mode: Mode,
    /// Active palette
    pub theme: Theme,
    /// Status bar messages
    pub status: StatusBarWriter,
    /// Click map from the last draw
    pub hits: HitMap,
    /// Picker layout and focus
    pub picker: PickerView,
    /// First visible row of the shell's selection list
    pub selection_scroll: usize,
    /// Visible rows of the selection list at the last draw
    pub selection_rows: usize,
    /// Leave the event loop after this iteration
    pub should_exit: bool,
}

impl UiState {
    /// Create UI state with a theme and a status message lifetime
    #[must_use]
    pub fn new(theme: Theme, message_ttl: Duration) -> Self {
        Self {
            mode: Mode::Normal,
            theme,
            status: StatusBarWriter::with_ttl(message_ttl),
            hits: HitMap::default(),
            picker: PickerView::default(),
            selection_scroll: 0,
            selection_rows: 1,
            should_exit: false,
        }
    }

    /// Start fresh for a newly opened picker
    pub fn reset_picker_view(&mut self) {
        self.picker = PickerView {
            columns: self.picker.columns,
            rows: self.picker.rows,
            ..PickerView::default()
        };
    }

    /// Scroll the selection list by `delta` rows, clamped to `len` entries
    pub fn scroll_selection(&mut self, delta: isize, len: usize) {
        let max = len.saturating_sub(self.selection_rows.max(1));
        self.selection_scroll = self.selection_scroll.saturating_add_signed(delta).min(max);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default(), StatusBarWriter::DEFAULT_TTL)
    }
}
