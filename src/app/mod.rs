//! Application shell
//!
//! [`AppState`] is the explicit application state: the base directory, the
//! selection list, and the stack of open dialogs. The terminal frontend
//! renders it and calls its actions; pickers hand their results back through
//! [`AppState::poll_dialogs`], never by mutating the shell directly.
//!
//! # Actions
//!
//! - **choose base directory**: directory single-select picker rooted at the
//!   base directory; a single confirmed result replaces the base directory
//! - **select files**: file multi-select picker pre-populated with the
//!   selection; a confirmed result (even empty) replaces the selection
//! - **delete selected**: deletes every selected path, then clears the
//!   selection regardless of failures
//! - **delete all**: opens a warning dialog; confirming it deletes nothing

mod delete;
mod dialogs;

pub use delete::{DeletionFailure, DeletionReport, delete_paths};
pub use dialogs::{ConfirmKind, ConfirmPrompt, Dialog, DialogStack, PickerPurpose};

use crate::fs::{self, FileSystem, StdFileSystem};
use crate::picker::{self, PickerMode, PickerOutcome, PickerRequest};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Picker and delete behaviour taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Pickers start with hidden entries visible
    pub show_hidden: bool,
    /// Double-click threshold for pickers
    pub double_click: Duration,
    /// Ask before "delete selected"
    pub confirm_delete_selected: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_hidden: false,
            double_click: Duration::from_millis(picker::DEFAULT_DOUBLE_CLICK_MS),
            confirm_delete_selected: false,
        }
    }
}

/// Something the shell did in response to a closed dialog or an action
#[derive(Debug)]
pub enum AppEvent {
    /// The base directory was replaced
    BaseDirectoryChanged(PathBuf),
    /// The selection list was replaced; holds the new length
    SelectionReplaced(usize),
    /// A picker was cancelled; nothing changed
    PickerCancelled,
    /// A delete pass ran
    Deleted(DeletionReport),
    /// The delete-all warning was acknowledged; nothing was deleted
    DeleteAllUnavailable,
    /// A confirmation dialog was declined
    ConfirmDeclined,
}

/// State of the application shell
#[derive(Debug)]
pub struct AppState {
    base_dir: PathBuf,
    selection: Vec<PathBuf>,
    settings: AppSettings,
    dialogs: DialogStack,
}

impl AppState {
    /// Create the shell state rooted at `base_dir`
    #[must_use]
    pub fn new(base_dir: PathBuf, settings: AppSettings) -> Self {
        Self {
            base_dir,
            selection: Vec::new(),
            settings,
            dialogs: DialogStack::new(),
        }
    }

    /// Create the shell state rooted at the user's home directory
    #[must_use]
    pub fn at_home(settings: AppSettings) -> Self {
        Self::new(fs::home_dir(), settings)
    }

    /// Seed the selection list, keeping only existing regular files
    #[must_use]
    pub fn with_selection(mut self, paths: Vec<PathBuf>) -> Self {
        self.selection = paths
            .into_iter()
            .filter(|path| {
                let keep = StdFileSystem.is_file(path);
                if !keep {
                    warn!(path = %path.display(), "skipping initial selection entry that is not a file");
                }
                keep
            })
            .fold(Vec::new(), |mut acc, path| {
                if !acc.contains(&path) {
                    acc.push(path);
                }
                acc
            });
        self
    }

    /// Current base directory
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Current selection list
    #[must_use]
    pub fn selection(&self) -> &[PathBuf] {
        &self.selection
    }

    /// Settings in effect
    #[must_use]
    pub const fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Open dialogs
    #[must_use]
    pub const fn dialogs(&self) -> &DialogStack {
        &self.dialogs
    }

    /// Mutable access to open dialogs (input routing)
    pub const fn dialogs_mut(&mut self) -> &mut DialogStack {
        &mut self.dialogs
    }

    /// Total size in bytes of the selected files that still exist
    #[must_use]
    pub fn selected_size(&self) -> u64 {
        self.selection
            .iter()
            .filter_map(|path| std::fs::metadata(path).ok())
            .filter(std::fs::Metadata::is_file)
            .map(|meta| meta.len())
            .sum()
    }

    fn picker_request(&self, title: &str, mode: PickerMode) -> PickerRequest {
        PickerRequest::new(title, &self.base_dir, mode)
            .show_hidden(self.settings.show_hidden)
            .double_click(self.settings.double_click)
    }

    /// Open the base directory picker
    ///
    /// # Errors
    ///
    /// Returns a `PickerError` if the base directory is no longer valid; no
    /// dialog is opened in that case.
    pub fn choose_base_directory(&mut self) -> picker::Result<()> {
        let session = self
            .picker_request("Choose a base directory", PickerMode::Directory)
            .open()?;
        self.dialogs.push(Dialog::Picker {
            purpose: PickerPurpose::ChooseBaseDirectory,
            session: Box::new(session),
        });
        Ok(())
    }

    /// Open the file picker, pre-populated with the selection
    ///
    /// # Errors
    ///
    /// Returns a `PickerError` if the base directory is no longer valid; no
    /// dialog is opened in that case.
    pub fn select_files(&mut self) -> picker::Result<()> {
        let session = self
            .picker_request("Choose files", PickerMode::File)
            .multi_select(true)
            .preselected(self.selection.clone())
            .open()?;
        self.dialogs.push(Dialog::Picker {
            purpose: PickerPurpose::SelectFiles,
            session: Box::new(session),
        });
        Ok(())
    }

    /// Apply a finished picker's outcome
    pub fn apply_picker_outcome(
        &mut self,
        purpose: PickerPurpose,
        outcome: PickerOutcome,
    ) -> AppEvent {
        let Some(paths) = outcome.into_paths() else {
            return AppEvent::PickerCancelled;
        };
        match purpose {
            PickerPurpose::ChooseBaseDirectory => match <[PathBuf; 1]>::try_from(paths) {
                Ok([dir]) => {
                    info!(base_dir = %dir.display(), "base directory changed");
                    self.base_dir = dir.clone();
                    AppEvent::BaseDirectoryChanged(dir)
                }
                Err(paths) => {
                    warn!(count = paths.len(), "ignoring base directory result without exactly one entry");
                    AppEvent::PickerCancelled
                }
            },
            PickerPurpose::SelectFiles => {
                info!(count = paths.len(), "selection replaced");
                self.selection = paths;
                AppEvent::SelectionReplaced(self.selection.len())
            }
        }
    }

    /// Close a completed picker, if the top dialog is one, and apply its outcome
    pub fn poll_dialogs(&mut self) -> Option<AppEvent> {
        let (purpose, mut session) = self.dialogs.pop_completed_picker()?;
        let outcome = session.take_outcome()?;
        Some(self.apply_picker_outcome(purpose, outcome))
    }

    /// Delete the selection now, then clear it
    pub fn delete_selected(&mut self) -> DeletionReport {
        let paths = std::mem::take(&mut self.selection);
        info!(count = paths.len(), "deleting selected entries");
        delete_paths(&StdFileSystem, &paths)
    }

    /// "Delete selected" as triggered by the user
    ///
    /// Deletes immediately unless confirmation is configured, in which case a
    /// confirmation dialog is opened and `None` is returned.
    pub fn request_delete_selected(&mut self) -> Option<DeletionReport> {
        if self.settings.confirm_delete_selected && !self.selection.is_empty() {
            let context = self
                .selection
                .iter()
                .map(|p| fs::display_relative(p, &self.base_dir))
                .collect();
            self.dialogs.push(Dialog::Confirm(
                ConfirmPrompt::new(
                    ConfirmKind::DeleteSelected,
                    "Delete selected",
                    format!("Delete {} selected item(s)?", self.selection.len()),
                )
                .with_context(context),
            ));
            return None;
        }
        Some(self.delete_selected())
    }

    /// "Delete all" as triggered by the user: open the warning dialog
    pub fn request_delete_all(&mut self) {
        self.dialogs.push(Dialog::Confirm(
            ConfirmPrompt::new(
                ConfirmKind::DeleteAll,
                "Delete all files",
                "There is no \"delete everything\" action. Nothing will be deleted.",
            )
            .with_context(vec![self.base_dir.display().to_string()]),
        ));
    }

    /// Close the top confirmation dialog
    ///
    /// Returns `None` if the top dialog is not a confirmation.
    pub fn resolve_confirm(&mut self, accepted: bool) -> Option<AppEvent> {
        if !matches!(self.dialogs.top(), Some(Dialog::Confirm(_))) {
            return None;
        }
        let Some(Dialog::Confirm(prompt)) = self.dialogs.pop() else {
            return None;
        };
        if !accepted {
            return Some(AppEvent::ConfirmDeclined);
        }
        Some(match prompt.kind {
            ConfirmKind::DeleteSelected => AppEvent::Deleted(self.delete_selected()),
            ConfirmKind::DeleteAll => {
                info!("delete all acknowledged; the action is not implemented");
                AppEvent::DeleteAllUnavailable
            }
        })
    }
}
