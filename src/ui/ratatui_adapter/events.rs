//! Event handling for the terminal UI
//!
//! Key and mouse events are routed to the topmost dialog, or to the shell
//! when no dialog is open. Handlers call the public operations of
//! [`AppState`] and [`PickerSession`]; when a picker finishes, the shell
//! consumes its outcome through [`AppState::poll_dialogs`].

use super::state::{Button, HitTarget, Mode, UiState};
use crate::app::{AppEvent, AppState, Dialog};
use crate::fs::FileSystem;
use crate::picker::{Activation, PickerSession};
use crate::ui::output::OutputWriter;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::{Duration, Instant};
use tracing::error;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running the event loop
    Continue,
    /// Leave the event loop
    Quit,
    /// Nothing reacted to the event
    Ignored,
}

/// What currently receives input in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Help,
    Picker,
    Confirm,
    Shell,
}

fn focus(app: &AppState, ui: &UiState) -> Focus {
    if ui.mode == Mode::Help {
        return Focus::Help;
    }
    match app.dialogs().top() {
        Some(Dialog::Picker { .. }) => Focus::Picker,
        Some(Dialog::Confirm(_)) => Focus::Confirm,
        None => Focus::Shell,
    }
}

/// Report a shell event in the status bar
pub fn report(ui: &UiState, event: AppEvent) {
    match event {
        AppEvent::BaseDirectoryChanged(dir) => {
            ui.status.success(&format!("Base directory: {}", dir.display()));
        }
        AppEvent::SelectionReplaced(count) => {
            ui.status.info(&format!("{count} file(s) selected"));
        }
        AppEvent::PickerCancelled | AppEvent::ConfirmDeclined => ui.status.info("Cancelled"),
        AppEvent::Deleted(report) => report.write_to(&ui.status),
        AppEvent::DeleteAllUnavailable => {
            ui.status
                .warning("Delete all is not available. Nothing was deleted.");
        }
    }
}

// ============================================================================
// Shell
// ============================================================================

fn open_picker(ui: &mut UiState, result: crate::picker::Result<()>) {
    match result {
        Ok(()) => ui.reset_picker_view(),
        Err(err) => {
            error!(%err, "cannot open picker");
            ui.status.error(&format!("Cannot open picker: {err}"));
        }
    }
}

fn press_shell_button(app: &mut AppState, ui: &mut UiState, button: Button) -> EventResult {
    match button {
        Button::ChooseBase => {
            let result = app.choose_base_directory();
            open_picker(ui, result);
        }
        Button::SelectFiles => {
            let result = app.select_files();
            open_picker(ui, result);
        }
        Button::DeleteSelected => {
            if app.selection().is_empty() {
                return EventResult::Ignored;
            }
            if let Some(deleted) = app.request_delete_selected() {
                report(ui, AppEvent::Deleted(deleted));
            }
        }
        Button::DeleteAll => app.request_delete_all(),
        Button::ToggleTheme => ui.theme.toggle(),
        Button::Help => ui.mode = Mode::Help,
        Button::Quit => return EventResult::Quit,
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

fn handle_shell_key(app: &mut AppState, ui: &mut UiState, key: KeyEvent) -> EventResult {
    let len = app.selection().len();
    let page = isize::try_from(ui.selection_rows.max(1)).unwrap_or(1);
    match (key.code, key.modifiers) {
        (KeyCode::Char('q') | KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            EventResult::Quit
        }
        (KeyCode::Char('b'), _) => press_shell_button(app, ui, Button::ChooseBase),
        (KeyCode::Char('s'), _) => press_shell_button(app, ui, Button::SelectFiles),
        (KeyCode::Char('d'), _) => press_shell_button(app, ui, Button::DeleteSelected),
        (KeyCode::Char('D'), _) => press_shell_button(app, ui, Button::DeleteAll),
        (KeyCode::Char('t'), _) => press_shell_button(app, ui, Button::ToggleTheme),
        (KeyCode::F(1) | KeyCode::Char('?'), _) => press_shell_button(app, ui, Button::Help),
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            ui.scroll_selection(-1, len);
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            ui.scroll_selection(1, len);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            ui.scroll_selection(-page, len);
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            ui.scroll_selection(page, len);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_confirm_key(app: &mut AppState, ui: &UiState, key: KeyEvent) -> EventResult {
    let accepted = match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => true,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => false,
        _ => return EventResult::Ignored,
    };
    if let Some(event) = app.resolve_confirm(accepted) {
        report(ui, event);
    }
    EventResult::Continue
}

fn top_picker(app: &mut AppState) -> Option<&mut PickerSession> {
    match app.dialogs_mut().top_mut() {
        Some(Dialog::Picker { session, .. }) => Some(&mut **session),
        _ => None,
    }
}

/// Handle one terminal event in the shell
pub fn handle_app_event(
    app: &mut AppState,
    ui: &mut UiState,
    event: &Event,
    now: Instant,
) -> EventResult {
    let focus = focus(app, ui);
    let result = match event {
        Event::Key(key) if key.kind != KeyEventKind::Press => EventResult::Ignored,
        Event::Key(_) if focus == Focus::Help => {
            ui.mode = Mode::Normal;
            EventResult::Continue
        }
        Event::Key(key) => match focus {
            Focus::Picker => top_picker(app)
                .map_or(EventResult::Ignored, |session| {
                    handle_picker_key(session, ui, *key)
                }),
            Focus::Confirm => handle_confirm_key(app, ui, *key),
            Focus::Shell | Focus::Help => handle_shell_key(app, ui, *key),
        },
        Event::Mouse(mouse) => match focus {
            Focus::Help => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    ui.mode = Mode::Normal;
                }
                EventResult::Continue
            }
            Focus::Picker => top_picker(app)
                .map_or(EventResult::Ignored, |session| {
                    handle_picker_mouse(session, ui, *mouse, now)
                }),
            Focus::Confirm => handle_confirm_mouse(app, ui, *mouse),
            Focus::Shell => handle_shell_mouse(app, ui, *mouse),
        },
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    if let Some(app_event) = app.poll_dialogs() {
        report(ui, app_event);
    }
    result
}

fn clicked_target(ui: &UiState, mouse: MouseEvent) -> Option<HitTarget> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    ui.hits.target_at(mouse.column, mouse.row).cloned()
}

fn handle_shell_mouse(app: &mut AppState, ui: &mut UiState, mouse: MouseEvent) -> EventResult {
    let len = app.selection().len();
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            ui.scroll_selection(-1, len);
            return EventResult::Continue;
        }
        MouseEventKind::ScrollDown => {
            ui.scroll_selection(1, len);
            return EventResult::Continue;
        }
        _ => {}
    }
    match clicked_target(ui, mouse) {
        Some(HitTarget::Button(button)) => press_shell_button(app, ui, button),
        _ => EventResult::Ignored,
    }
}

fn handle_confirm_mouse(app: &mut AppState, ui: &UiState, mouse: MouseEvent) -> EventResult {
    let accepted = match clicked_target(ui, mouse) {
        Some(HitTarget::Button(Button::Yes)) => true,
        Some(HitTarget::Button(Button::No)) => false,
        _ => return EventResult::Ignored,
    };
    if let Some(event) = app.resolve_confirm(accepted) {
        report(ui, event);
    }
    EventResult::Continue
}

// ============================================================================
// Picker
// ============================================================================

fn move_cursor<F: FileSystem>(session: &mut PickerSession<F>, ui: &mut UiState, delta: isize) {
    session.move_cursor(delta);
    ui.picker.scroll_to(session.cursor());
}

fn activate_cursor<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
    activation: Activation,
) {
    if let Some(entry) = session.cursor_entry() {
        let before = session.current_dir().to_path_buf();
        session.activate(&entry.path, activation);
        if session.current_dir() != before {
            ui.picker.scroll_row = 0;
        }
    }
}

fn press_picker_button<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
    button: Button,
) -> EventResult {
    match button {
        Button::Up => session.go_up(),
        Button::Home => session.go_home(),
        Button::ToggleHidden => session.toggle_hidden(),
        Button::Location => ui.picker.location_focused = true,
        Button::Cancel => session.cancel(),
        Button::Confirm => {
            if !session.confirm() {
                return EventResult::Ignored;
            }
        }
        Button::Help => ui.mode = Mode::Help,
        _ => return EventResult::Ignored,
    }
    if !matches!(button, Button::Location | Button::Help) {
        ui.picker.scroll_to(session.cursor());
    }
    EventResult::Continue
}

fn handle_location_key<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
    key: KeyEvent,
) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down, _) => {
            ui.picker.location_focused = false;
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            session.edit_location(|field| field.delete_component_backwards());
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            session.edit_location(|field| field.set_text(""));
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => session.cancel(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            session.edit_location(|field| field.insert_char(c));
        }
        (KeyCode::Backspace, _) => session.edit_location(|field| field.backspace()),
        (KeyCode::Delete, _) => session.edit_location(|field| field.delete()),
        (KeyCode::Left, _) => session.edit_location(|field| field.cursor_left()),
        (KeyCode::Right, _) => session.edit_location(|field| field.cursor_right()),
        (KeyCode::Home, _) => session.edit_location(|field| field.cursor_home()),
        (KeyCode::End, _) => session.edit_location(|field| field.cursor_end()),
        _ => return EventResult::Ignored,
    }
    ui.picker.scroll_to(session.cursor());
    EventResult::Continue
}

/// Handle a key press in a picker
pub fn handle_picker_key<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
    key: KeyEvent,
) -> EventResult {
    if session.is_complete() {
        return EventResult::Ignored;
    }
    if ui.picker.location_focused {
        return handle_location_key(session, ui, key);
    }

    let columns = isize::try_from(ui.picker.columns.max(1)).unwrap_or(1);
    let page = isize::try_from(ui.picker.page_len()).unwrap_or(1);
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            press_picker_button(session, ui, Button::Cancel)
        }
        (KeyCode::Char('c'), _) => press_picker_button(session, ui, Button::Confirm),
        (KeyCode::Char(' '), _) => {
            activate_cursor(session, ui, Activation::Single);
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            activate_cursor(session, ui, Activation::Double);
            EventResult::Continue
        }
        (KeyCode::Backspace | KeyCode::Char('u'), _) => {
            press_picker_button(session, ui, Button::Up)
        }
        (KeyCode::Char('~'), _) => press_picker_button(session, ui, Button::Home),
        (KeyCode::Char('h'), _) => press_picker_button(session, ui, Button::ToggleHidden),
        (KeyCode::Char('/') | KeyCode::Tab, _) => {
            press_picker_button(session, ui, Button::Location)
        }
        (KeyCode::F(1) | KeyCode::Char('?'), _) => press_picker_button(session, ui, Button::Help),
        (KeyCode::Left, _) => {
            move_cursor(session, ui, -1);
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            move_cursor(session, ui, 1);
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            move_cursor(session, ui, -columns);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            move_cursor(session, ui, columns);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            move_cursor(session, ui, -page);
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            move_cursor(session, ui, page);
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            session.set_cursor(0);
            ui.picker.scroll_to(0);
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            session.set_cursor(usize::MAX);
            ui.picker.scroll_to(session.cursor());
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a mouse event in a picker
pub fn handle_picker_mouse<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
    mouse: MouseEvent,
    now: Instant,
) -> EventResult {
    if session.is_complete() {
        return EventResult::Ignored;
    }
    let columns = isize::try_from(ui.picker.columns.max(1)).unwrap_or(1);
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            move_cursor(session, ui, -columns);
            return EventResult::Continue;
        }
        MouseEventKind::ScrollDown => {
            move_cursor(session, ui, columns);
            return EventResult::Continue;
        }
        _ => {}
    }

    match clicked_target(ui, mouse) {
        Some(HitTarget::Entry(path)) => {
            ui.picker.location_focused = false;
            if let Some(index) = session.listing().iter().position(|e| e.path == path) {
                session.set_cursor(index);
            }
            let before = session.current_dir().to_path_buf();
            session.click(&path, now);
            if session.current_dir() != before {
                ui.picker.scroll_row = 0;
            }
            EventResult::Continue
        }
        Some(HitTarget::Button(button)) => {
            if button != Button::Location {
                ui.picker.location_focused = false;
            }
            press_picker_button(session, ui, button)
        }
        None => EventResult::Ignored,
    }
}

/// Handle one terminal event in the standalone picker
pub fn handle_picker_event<F: FileSystem>(
    session: &mut PickerSession<F>,
    ui: &mut UiState,
    event: &Event,
    now: Instant,
) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Press => EventResult::Ignored,
        Event::Key(_) | Event::Mouse(_) if ui.mode == Mode::Help => {
            ui.mode = Mode::Normal;
            EventResult::Continue
        }
        Event::Key(key) => handle_picker_key(session, ui, *key),
        Event::Mouse(mouse) => handle_picker_mouse(session, ui, *mouse, now),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Wait up to `timeout` for a terminal event
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppSettings;
    use crate::picker::{PickerMode, PickerOutcome, PickerRequest};
    use crate::testing::TempTree;
    use crate::ui::output::MessageLevel;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_shell_quit_keys() {
        let tree = TempTree::new();
        let mut app = AppState::new(tree.path().to_path_buf(), AppSettings::default());
        let mut ui = UiState::default();

        let now = Instant::now();
        assert_eq!(handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('q')), now), EventResult::Quit);
        assert_eq!(handle_app_event(&mut app, &mut ui, &key(KeyCode::Esc), now), EventResult::Quit);
    }

    #[test]
    fn test_select_files_via_keys() {
        let tree = TempTree::new().file("a.txt").file("b.txt");
        let mut app = AppState::new(tree.path().to_path_buf(), AppSettings::default());
        let mut ui = UiState::default();
        let now = Instant::now();

        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('s')), now);
        assert_eq!(app.dialogs().len(), 1);

        // Space selects a.txt, Right + Space selects b.txt, c confirms
        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char(' ')), now);
        handle_app_event(&mut app, &mut ui, &key(KeyCode::Right), now);
        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char(' ')), now);
        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('c')), now);

        assert!(app.dialogs().is_empty());
        assert_eq!(app.selection(), &[tree.join("a.txt"), tree.join("b.txt")]);
        assert_eq!(
            ui.status.latest_message(),
            Some((MessageLevel::Info, "2 file(s) selected".to_string()))
        );
    }

    #[test]
    fn test_escape_cancels_picker_not_shell() {
        let tree = TempTree::new();
        let mut app = AppState::new(tree.path().to_path_buf(), AppSettings::default());
        let mut ui = UiState::default();
        let now = Instant::now();

        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('b')), now);
        let result = handle_app_event(&mut app, &mut ui, &key(KeyCode::Esc), now);

        assert_eq!(result, EventResult::Continue);
        assert!(app.dialogs().is_empty());
        assert_eq!(app.base_dir(), tree.path());
    }

    #[test]
    fn test_open_picker_error_goes_to_status_bar() {
        let tree = TempTree::new();
        let mut app = AppState::new(tree.join("gone"), AppSettings::default());
        let mut ui = UiState::default();

        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('s')), Instant::now());

        assert!(app.dialogs().is_empty());
        let (level, text) = ui.status.latest_message().unwrap();
        assert_eq!(level, MessageLevel::Error);
        assert!(text.starts_with("Cannot open picker"));
    }

    #[test]
    fn test_delete_all_then_confirm_is_inert() {
        let tree = TempTree::new().file("a.txt");
        let mut app = AppState::new(tree.path().to_path_buf(), AppSettings::default())
            .with_selection(vec![tree.join("a.txt")]);
        let mut ui = UiState::default();
        let now = Instant::now();

        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('D')), now);
        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('y')), now);

        assert!(tree.join("a.txt").exists());
        assert_eq!(ui.status.latest_message().map(|(l, _)| l), Some(MessageLevel::Warning));
    }

    #[test]
    fn test_delete_selected_key() {
        let tree = TempTree::new().file("a.txt");
        let mut app = AppState::new(tree.path().to_path_buf(), AppSettings::default())
            .with_selection(vec![tree.join("a.txt")]);
        let mut ui = UiState::default();

        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('d')), Instant::now());

        assert!(!tree.join("a.txt").exists());
        assert!(app.selection().is_empty());
        assert_eq!(
            ui.status.latest_message(),
            Some((MessageLevel::Info, "Deleted 1 item(s)".to_string()))
        );
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let tree = TempTree::new();
        let mut app = AppState::new(tree.path().to_path_buf(), AppSettings::default());
        let mut ui = UiState::default();
        let now = Instant::now();

        handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('?')), now);
        assert_eq!(ui.mode, Mode::Help);
        let result = handle_app_event(&mut app, &mut ui, &key(KeyCode::Char('q')), now);
        assert_eq!(result, EventResult::Continue);
        assert_eq!(ui.mode, Mode::Normal);
    }

    #[test]
    fn test_picker_double_click_on_grid_cell() {
        let tree = TempTree::new().dir("docs").file("docs/readme.txt");
        let mut session = PickerRequest::new("t", tree.path(), PickerMode::File)
            .open()
            .unwrap();
        let mut ui = UiState::default();
        ui.hits
            .push(Rect::new(0, 0, 24, 1), HitTarget::Entry(tree.join("docs")));

        let now = Instant::now();
        handle_picker_event(&mut session, &mut ui, &click(3, 0), now);
        assert_eq!(session.current_dir(), tree.path());
        handle_picker_event(&mut session, &mut ui, &click(3, 0), now + Duration::from_millis(120));
        assert_eq!(session.current_dir(), tree.join("docs"));
    }

    #[test]
    fn test_picker_enter_picks_file_in_single_select() {
        let tree = TempTree::new().file("a.txt");
        let mut session = PickerRequest::new("t", tree.path(), PickerMode::File)
            .open()
            .unwrap();
        let mut ui = UiState::default();

        handle_picker_event(&mut session, &mut ui, &key(KeyCode::Enter), Instant::now());
        assert_eq!(
            session.take_outcome(),
            Some(PickerOutcome::Confirmed(vec![tree.join("a.txt")]))
        );
    }

    #[test]
    fn test_location_focus_routes_typing() {
        let tree = TempTree::new().dir("docs");
        let mut session = PickerRequest::new("t", tree.path(), PickerMode::Directory)
            .open()
            .unwrap();
        let mut ui = UiState::default();
        let now = Instant::now();

        handle_picker_event(&mut session, &mut ui, &key(KeyCode::Char('/')), now);
        assert!(ui.picker.location_focused);
        for c in format!("{}docs", std::path::MAIN_SEPARATOR).chars() {
            handle_picker_event(&mut session, &mut ui, &key(KeyCode::Char(c)), now);
        }
        assert_eq!(session.current_dir(), tree.join("docs"));

        // 'h' is text while the field has focus
        handle_picker_event(&mut session, &mut ui, &key(KeyCode::Char('h')), now);
        assert!(!session.location().valid);
        assert!(!session.show_hidden());

        handle_picker_event(&mut session, &mut ui, &key(KeyCode::Esc), now);
        assert!(!ui.picker.location_focused);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let tree = TempTree::new();
        let mut session = PickerRequest::new("t", tree.path(), PickerMode::Directory)
            .open()
            .unwrap();
        let mut ui = UiState::default();
        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        let result = handle_picker_event(&mut session, &mut ui, &Event::Key(release), Instant::now());
        assert_eq!(result, EventResult::Ignored);
        assert!(!session.is_complete());
    }
}
