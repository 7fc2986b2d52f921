//! Terminal UI errors

use thiserror::Error;

/// Errors raised while driving the terminal
#[derive(Debug, Error)]
pub enum UiError {
    /// Stdout is not a terminal
    #[error("fdel needs an interactive terminal")]
    NotATerminal,

    /// Terminal setup, drawing, or event polling failed
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
