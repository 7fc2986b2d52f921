//! Ratatui frontend
//!
//! Renders the application shell and picker dialogs, and turns crossterm
//! key and mouse events into shell and picker operations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ runner: terminal setup, draw/poll loop       │
//! └───────────────┬───────────────┬──────────────┘
//!                 ▼               ▼
//!          ┌────────────┐  ┌─────────────┐
//!          │    view    │  │   events    │
//!          │ (layout +  │  │ (keys and   │
//!          │  hit map)  │  │  clicks)    │
//!          └─────┬──────┘  └──────┬──────┘
//!                ▼                ▼
//!          ┌────────────┐  ┌─────────────────────────┐
//!          │  widgets   │  │ AppState / PickerSession│
//!          └────────────┘  └─────────────────────────┘
//! ```
//!
//! # Features
//!
//! - **Mouse support**: click and double-click entries, click buttons
//! - **Keyboard equivalents** for every action
//! - **Dark and light themes**
//! - **Status bar** with expiring messages
//! - **Help overlay** (F1 / `?`)

mod events;
mod runner;
mod state;
mod theme;
mod view;
pub mod widgets;

pub use events::{EventResult, handle_app_event, handle_picker_event};
pub use runner::{run_app, run_picker};
pub use state::{Button, HitMap, HitTarget, Mode, PickerView, UiState};
pub use theme::{Theme, ThemeKind};
pub use view::{format_size, render_app, render_standalone_picker};
