//! Picker error types

use std::path::PathBuf;
use thiserror::Error;

/// Caller errors detected when a picker is opened
///
/// These are programming errors on the caller's side. They are reported
/// before any dialog is shown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    /// Base directory does not exist or is not a directory
    #[error("Invalid base directory: {}", .0.display())]
    InvalidBaseDirectory(PathBuf),

    /// Pre-selection contains a non-directory in directory mode
    #[error("Default selection contains files in directory mode: {}", .0.display())]
    PreselectionNotDirectory(PathBuf),

    /// Pre-selection contains a non-file in file mode
    #[error("Default selection contains directories in file mode: {}", .0.display())]
    PreselectionNotFile(PathBuf),

    /// More than one pre-selected entry in single-select mode
    #[error("Default selection contains {0} entries in single-select mode")]
    TooManyPreselected(usize),
}

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;
