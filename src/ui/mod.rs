//! User interface layer
//!
//! The interactive shell and the standalone picker are drawn with ratatui
//! over crossterm. Everything the user sees is derived from
//! [`crate::app::AppState`] and [`crate::picker::PickerSession`]; the UI
//! layer only owns presentation state (theme, status messages, scroll
//! offsets, and the click map).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  AppState / PickerSession               │
//! │  (selection, dialogs, navigation)       │
//! └────────────────┬────────────────────────┘
//!                  │ read for rendering, mutated by events
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  ratatui_adapter                        │
//! │  runner ─ view ─ events ─ widgets       │
//! └────────────────┬────────────────────────┘
//!                  │
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │   Ratatui     │  │    Crossterm      │
//! │  (widgets)    │  │ (keys and mouse)  │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! Plain command-line output (the `pick`, `delete`, and `config`
//! subcommands) goes through [`output::StdoutWriter`].

pub mod error;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
