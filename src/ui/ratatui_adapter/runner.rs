//! Terminal lifecycle and event loops
//!
//! Sets up raw mode, the alternate screen, and mouse capture, runs the draw
//! and event loop, and restores the terminal even when the loop fails.

use super::events::{EventResult, handle_app_event, handle_picker_event, poll};
use super::state::UiState;
use super::view::{render_app, render_standalone_picker};
use crate::app::AppState;
use crate::fs::FileSystem;
use crate::picker::{PickerOutcome, PickerSession};
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long to wait for input before redrawing (expires status messages)
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Term = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Term> {
    if !io::stdout().is_terminal() {
        return Err(UiError::NotATerminal);
    }
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn cleanup_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run `body` inside the alternate screen, restoring the terminal afterwards
fn with_terminal<T>(body: impl FnOnce(&mut Term) -> Result<T>) -> Result<T> {
    let mut terminal = setup_terminal()?;
    let result = body(&mut terminal);
    let cleanup = cleanup_terminal(&mut terminal);
    let value = result?;
    cleanup?;
    Ok(value)
}

/// Run the interactive shell until the user quits
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be set up, drawn, or polled.
pub fn run_app(app: &mut AppState, ui: &mut UiState) -> Result<()> {
    info!(base_dir = %app.base_dir().display(), "starting shell");
    with_terminal(|terminal| {
        while !ui.should_exit {
            terminal.draw(|frame| render_app(frame, app, ui))?;

            if let Some(event) = poll(POLL_INTERVAL)?
                && handle_app_event(app, ui, &event, Instant::now()) == EventResult::Quit
            {
                debug!("quit requested");
                ui.should_exit = true;
            }
            ui.status.prune();
        }
        Ok(())
    })
}

/// Run a single picker full-screen until it completes
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be set up, drawn, or polled.
pub fn run_picker<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
) -> Result<PickerOutcome> {
    with_terminal(|terminal| {
        loop {
            if let Some(outcome) = session.take_outcome() {
                return Ok(outcome);
            }
            terminal.draw(|frame| render_standalone_picker(frame, session, ui))?;

            if let Some(event) = poll(POLL_INTERVAL)? {
                handle_picker_event(session, ui, &event, Instant::now());
            }
            ui.status.prune();
        }
    })
}
