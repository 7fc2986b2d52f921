//! File picker component
//!
//! A picker session browses a directory tree starting from a base directory,
//! tracks an ordered selection of files or directories, and finishes exactly
//! once with either the confirmed paths or a cancellation.
//!
//! # Architecture
//!
//! ```text
//! PickerRequest ──open()──▶ PickerSession ──confirm()/cancel()──▶ PickerOutcome
//!   (validated)               │  listing()  (live, sorted, filtered)
//!                             │  click()/activate()
//!                             │  go_up()/go_home()/edit_location()
//!                             ▼
//!                         Selection (ordered, duplicate-free)
//! ```
//!
//! The session owns no UI. The terminal frontend in
//! [`crate::ui::ratatui_adapter`] renders it and feeds it input.
//!
//! # Examples
//!
//! ```no_run
//! use fdel::picker::{PickerMode, PickerOutcome, PickerRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = PickerRequest::new("Choose files", "/tmp", PickerMode::File)
//!     .multi_select(true)
//!     .open()?;
//!
//! session.cancel();
//! assert_eq!(session.take_outcome(), Some(PickerOutcome::Cancelled));
//! # Ok(())
//! # }
//! ```

mod error;
mod listing;
mod request;
mod selection;
mod session;

pub use error::{PickerError, Result};
pub use listing::{list_entries, sort_entries};
pub use request::{PickerMode, PickerRequest};
pub use selection::Selection;
pub use session::{Activation, LocationField, PickerOutcome, PickerSession};

/// Default gap between two clicks on the same entry that counts as a double click
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 350;
