//! A running picker session
//!
//! Holds the navigation state, the selection, and the eventual outcome.
//! Listing is re-derived from the filesystem on every call, so entries that
//! disappear simply vanish from the next render.

use super::listing::list_entries;
use super::request::PickerMode;
use super::selection::Selection;
use crate::fs::{self, Entry, FileSystem, StdFileSystem};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How an entry was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Single click / Space
    Single,
    /// Double click / Enter
    Double,
}

/// Final result of a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The user confirmed; paths are in selection order
    Confirmed(Vec<PathBuf>),
    /// The user cancelled or closed the dialog
    Cancelled,
}

impl PickerOutcome {
    /// Confirmed paths, or `None` when cancelled
    #[must_use]
    pub fn into_paths(self) -> Option<Vec<PathBuf>> {
        match self {
            Self::Confirmed(paths) => Some(paths),
            Self::Cancelled => None,
        }
    }
}

/// The editable location field
///
/// The text is kept verbatim; `valid` tells whether it names an existing
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationField {
    /// Current text
    pub text: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
    /// Whether the text names an existing directory
    pub valid: bool,
}

impl LocationField {
    fn for_dir(dir: &Path) -> Self {
        let text = dir.display().to_string();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            valid: true,
        }
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.text.remove(idx);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        let idx = self.byte_index();
        if idx < self.text.len() {
            self.text.remove(idx);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Replace the whole text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_end();
    }

    /// Delete the path component before the cursor (Ctrl+W)
    pub fn delete_component_backwards(&mut self) {
        let idx = self.byte_index();
        let before = self.text[..idx].trim_end_matches(std::path::is_separator);
        let start = before.rfind(std::path::is_separator).map_or(0, |i| i + 1);
        self.text.drain(start..idx);
        self.cursor = self.text[..start].chars().count();
    }
}

/// State of one picker invocation
#[derive(Debug)]
pub struct PickerSession<F = StdFileSystem> {
    fs: F,
    title: String,
    mode: PickerMode,
    multi_select: bool,
    current_dir: PathBuf,
    show_hidden: bool,
    selection: Selection,
    location: LocationField,
    /// Grid cursor into the current listing
    cursor: usize,
    /// Last activation per entry; reset on every directory change
    last_clicks: HashMap<PathBuf, Instant>,
    double_click: Duration,
    outcome: Option<PickerOutcome>,
    completed: bool,
}

impl<F: FileSystem> PickerSession<F> {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        fs: F,
        title: String,
        base_dir: PathBuf,
        mode: PickerMode,
        multi_select: bool,
        selection: Selection,
        show_hidden: bool,
        double_click: Duration,
    ) -> Self {
        Self {
            fs,
            title,
            mode,
            multi_select,
            location: LocationField::for_dir(&base_dir),
            current_dir: base_dir,
            show_hidden,
            selection,
            cursor: 0,
            last_clicks: HashMap::new(),
            double_click,
            outcome: None,
            completed: false,
        }
    }

    /// Dialog title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Directory or file mode
    #[must_use]
    pub const fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Whether multi-select is enabled
    #[must_use]
    pub const fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    /// Directory currently shown
    #[must_use]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Whether dot-prefixed entries are listed
    #[must_use]
    pub const fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Location field state
    #[must_use]
    pub const fn location(&self) -> &LocationField {
        &self.location
    }

    /// Whether the session has produced its outcome
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Entries of the current directory, sorted and filtered
    #[must_use]
    pub fn listing(&self) -> Vec<Entry> {
        list_entries(&self.fs, &self.current_dir, self.mode, self.show_hidden)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Whether [`go_up`](Self::go_up) is possible
    #[must_use]
    pub fn can_go_up(&self) -> bool {
        self.fs.parent(&self.current_dir).is_some()
    }

    /// Navigate to the parent directory
    pub fn go_up(&mut self) {
        if self.completed {
            return;
        }
        if let Some(parent) = self.fs.parent(&self.current_dir) {
            self.navigate_to(parent);
        }
    }

    /// Navigate to the user's home directory
    pub fn go_home(&mut self) {
        if self.completed {
            return;
        }
        let home = fs::home_dir();
        if self.fs.is_dir(&home) {
            self.navigate_to(home);
        } else {
            warn!(home = %home.display(), "home directory is not available");
        }
    }

    /// Navigate into `dir` if it is an existing directory
    pub fn enter_directory(&mut self, dir: &Path) {
        if self.completed {
            return;
        }
        if self.fs.is_dir(dir) {
            self.navigate_to(dir.to_path_buf());
        } else {
            debug!(dir = %dir.display(), "ignoring navigation to non-directory");
        }
    }

    /// Show or hide dot-prefixed entries
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.clamp_cursor();
    }

    /// Edit the location field, then follow it if it names a directory
    ///
    /// When the edited text is not an existing directory the field is
    /// marked invalid, the text is kept as typed, and the current directory
    /// does not change.
    pub fn edit_location(&mut self, edit: impl FnOnce(&mut LocationField)) {
        if self.completed {
            return;
        }
        edit(&mut self.location);

        let typed = PathBuf::from(&self.location.text);
        if !self.location.text.is_empty() && self.fs.is_dir(&typed) {
            self.location.valid = true;
            if typed != self.current_dir {
                self.set_current_dir(typed);
            }
        } else {
            self.location.valid = false;
        }
    }

    /// Replace the location text as if typed
    pub fn set_location_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.edit_location(|field| field.set_text(text));
    }

    fn navigate_to(&mut self, dir: PathBuf) {
        self.location = LocationField::for_dir(&dir);
        self.set_current_dir(dir);
    }

    fn set_current_dir(&mut self, dir: PathBuf) {
        debug!(dir = %dir.display(), "picker navigated");
        self.current_dir = dir;
        self.last_clicks.clear();
        self.cursor = 0;
    }

    // ========================================================================
    // Grid cursor
    // ========================================================================

    /// Cursor position in the listing
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor by `delta` entries, clamped to the listing
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.listing().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(len - 1);
    }

    /// Put the cursor on `index`, clamped to the listing
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.clamp_cursor();
    }

    /// Entry under the cursor
    #[must_use]
    pub fn cursor_entry(&self) -> Option<Entry> {
        self.listing().into_iter().nth(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        let len = self.listing().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    // ========================================================================
    // Activation and selection
    // ========================================================================

    /// Handle a click on `path` at time `now`
    ///
    /// A second click on the same entry within the double-click threshold is
    /// a double click. Returns how the click was classified.
    pub fn click(&mut self, path: &Path, now: Instant) -> Activation {
        let is_double = self
            .last_clicks
            .get(path)
            .is_some_and(|last| now.saturating_duration_since(*last) < self.double_click);
        self.last_clicks.insert(path.to_path_buf(), now);

        let activation = if is_double {
            Activation::Double
        } else {
            Activation::Single
        };
        self.activate(path, activation);
        activation
    }

    /// Apply a single or double activation to `path`
    pub fn activate(&mut self, path: &Path, activation: Activation) {
        if self.completed {
            return;
        }

        if self.fs.is_dir(path) {
            match (activation, self.mode) {
                (Activation::Double, _) => self.navigate_to(path.to_path_buf()),
                (Activation::Single, PickerMode::Directory) => self.select(path),
                // Directories are not selectable in file mode
                (Activation::Single, PickerMode::File) => {}
            }
        } else if self.fs.is_file(path) {
            if self.mode != PickerMode::File {
                return;
            }
            if activation == Activation::Double && !self.multi_select {
                self.complete(PickerOutcome::Confirmed(vec![path.to_path_buf()]));
            } else {
                self.select(path);
            }
        } else {
            debug!(path = %path.display(), "ignoring activation of vanished entry");
        }
    }

    /// Toggle in multi-select, replace in single-select
    fn select(&mut self, path: &Path) {
        if self.multi_select {
            self.selection.toggle(path);
        } else {
            self.selection.replace(path.to_path_buf());
        }
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Whether the confirm action is enabled
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        (self.mode == PickerMode::Directory && !self.multi_select) || !self.selection.is_empty()
    }

    /// Whether confirming yields the current directory itself
    #[must_use]
    pub fn uses_current_directory(&self) -> bool {
        self.mode == PickerMode::Directory
            && !self.multi_select
            && self
                .selection
                .first()
                .is_none_or(|first| first == self.current_dir)
    }

    /// Label for the confirm action
    #[must_use]
    pub fn confirm_label(&self) -> &'static str {
        if self.uses_current_directory() {
            "Select this directory"
        } else {
            "Confirm selection"
        }
    }

    /// One-line description of the selection
    #[must_use]
    pub fn summary(&self) -> String {
        let noun = self.mode.noun();
        if !self.can_confirm() {
            format!("No {noun} is selected")
        } else if self.uses_current_directory() {
            String::new()
        } else if let [only] = self.selection.as_slice() {
            format!(
                "Selected {noun}: {}",
                fs::relative_to(only, &self.current_dir).display()
            )
        } else {
            format!("Selected {} {noun} entries", self.selection.len())
        }
    }

    /// Confirm the selection
    ///
    /// Returns `false` (and does nothing) when confirming is not allowed.
    pub fn confirm(&mut self) -> bool {
        if self.completed || !self.can_confirm() {
            return false;
        }
        let paths = if self.uses_current_directory() {
            vec![self.current_dir.clone()]
        } else {
            self.selection.as_slice().to_vec()
        };
        self.complete(PickerOutcome::Confirmed(paths));
        true
    }

    /// Cancel the session
    pub fn cancel(&mut self) {
        self.complete(PickerOutcome::Cancelled);
    }

    fn complete(&mut self, outcome: PickerOutcome) {
        if self.completed {
            return;
        }
        match &outcome {
            PickerOutcome::Confirmed(paths) => {
                info!(title = %self.title, count = paths.len(), "picker confirmed");
            }
            PickerOutcome::Cancelled => info!(title = %self.title, "picker cancelled"),
        }
        self.completed = true;
        self.outcome = Some(outcome);
    }

    /// Hand out the outcome
    ///
    /// Returns `Some` exactly once, after the session completed.
    pub fn take_outcome(&mut self) -> Option<PickerOutcome> {
        self.outcome.take()
    }
}
