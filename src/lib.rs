//! fdel - The Ultimate Auto File Deleter
//!
//! A terminal file browser for choosing files and directories, plus a small
//! shell that collects a selection and deletes it.
//!
//! The [`picker`] module is the reusable part: it knows nothing about the
//! terminal and can be driven from tests or any frontend. The [`app`]
//! module is the shell around it, and [`ui`] renders both with ratatui.

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod config;
pub mod fs;
pub mod logging;
pub mod picker;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FdelError {
    /// Picker could not be opened
    #[error("Picker error: {0}")]
    PickerError(#[from] picker::PickerError),
    /// Terminal could not be driven
    #[error(transparent)]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Output could not be serialized
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for fdel operations
pub type Result<T> = std::result::Result<T, FdelError>;
