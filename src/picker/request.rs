//! Picker configuration and validation

use super::error::{PickerError, Result};
use super::selection::Selection;
use super::session::PickerSession;
use super::DEFAULT_DOUBLE_CLICK_MS;
use crate::fs::{FileSystem, StdFileSystem};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Which kind of entry the picker selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    /// Directories only; files are not listed
    Directory,
    /// Regular files only; directories are listed for navigation
    File,
}

impl PickerMode {
    /// Noun used in summaries ("directory" / "file")
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Everything needed to open a picker session
#[derive(Debug, Clone)]
pub struct PickerRequest {
    /// Dialog title
    pub title: String,
    /// Directory the picker starts in
    pub base_dir: PathBuf,
    /// Directory or file mode
    pub mode: PickerMode,
    /// Allow more than one selected entry
    pub multi_select: bool,
    /// Initial selection
    pub preselected: Vec<PathBuf>,
    /// Start with dot-prefixed entries visible
    pub show_hidden: bool,
    /// Maximum gap between clicks on the same entry for a double click
    pub double_click: Duration,
}

impl PickerRequest {
    /// Create a single-select request with no pre-selection
    #[must_use]
    pub fn new(title: impl Into<String>, base_dir: impl Into<PathBuf>, mode: PickerMode) -> Self {
        Self {
            title: title.into(),
            base_dir: base_dir.into(),
            mode,
            multi_select: false,
            preselected: Vec::new(),
            show_hidden: false,
            double_click: Duration::from_millis(DEFAULT_DOUBLE_CLICK_MS),
        }
    }

    /// Enable multi-select
    #[must_use]
    pub const fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    /// Set the initial selection
    #[must_use]
    pub fn preselected(mut self, paths: Vec<PathBuf>) -> Self {
        self.preselected = paths;
        self
    }

    /// Start with hidden entries visible
    #[must_use]
    pub const fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Set the double-click threshold
    #[must_use]
    pub const fn double_click(mut self, threshold: Duration) -> Self {
        self.double_click = threshold;
        self
    }

    /// Validate the request and open a session on the real filesystem
    ///
    /// # Errors
    ///
    /// See [`PickerRequest::open_with`].
    pub fn open(self) -> Result<PickerSession> {
        self.open_with(StdFileSystem)
    }

    /// Validate the request and open a session on `fs`
    ///
    /// Pre-selected paths that no longer exist are dropped before validation.
    ///
    /// # Errors
    ///
    /// - `InvalidBaseDirectory` if the base directory is missing or not a directory
    /// - `PreselectionNotDirectory` / `PreselectionNotFile` if a pre-selected
    ///   entry does not match the mode
    /// - `TooManyPreselected` if more than one entry is pre-selected in
    ///   single-select mode
    pub fn open_with<F: FileSystem>(self, fs: F) -> Result<PickerSession<F>> {
        if !fs.is_dir(&self.base_dir) {
            return Err(PickerError::InvalidBaseDirectory(self.base_dir));
        }

        let selection = Selection::from_paths(self.preselected.into_iter().filter(|path| {
            let exists = fs.exists(path);
            if !exists {
                tracing::debug!(path = %path.display(), "dropping missing pre-selected entry");
            }
            exists
        }));

        for path in selection.as_slice() {
            match self.mode {
                PickerMode::Directory if !fs.is_dir(path) => {
                    return Err(PickerError::PreselectionNotDirectory(path.clone()));
                }
                PickerMode::File if !fs.is_file(path) => {
                    return Err(PickerError::PreselectionNotFile(path.clone()));
                }
                _ => {}
            }
        }
        if !self.multi_select && selection.len() > 1 {
            return Err(PickerError::TooManyPreselected(selection.len()));
        }

        tracing::info!(
            title = %self.title,
            base_dir = %self.base_dir.display(),
            mode = %self.mode,
            multi_select = self.multi_select,
            preselected = selection.len(),
            "opening picker"
        );

        Ok(PickerSession::new(
            fs,
            self.title,
            self.base_dir,
            self.mode,
            self.multi_select,
            selection,
            self.show_hidden,
            self.double_click,
        ))
    }
}
