//! Ratatui widgets for the shell and the picker

mod button_bar;
mod confirm_dialog;
mod entry_grid;
mod help_overlay;
mod location_bar;
mod selection_list;
mod status_bar;

pub use button_bar::{ButtonBar, ButtonSpec};
pub use confirm_dialog::{ConfirmDialog, ConfirmLayout};
pub use entry_grid::{CELL_WIDTH, EntryGrid};
pub use help_overlay::HelpOverlay;
pub use location_bar::LocationBar;
pub use selection_list::SelectionList;
pub use status_bar::StatusBar;
