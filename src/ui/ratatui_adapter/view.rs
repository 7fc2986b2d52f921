//! Frame layout for the shell and the picker
//!
//! Rendering also rebuilds the click map in [`UiState::hits`]: only the
//! topmost dialog registers click targets, so the shell underneath an open
//! dialog does not react to the mouse.

use super::state::{Button, HitTarget, Mode, UiState};
use super::widgets::{
    ButtonBar, ButtonSpec, ConfirmDialog, EntryGrid, HelpOverlay, LocationBar, SelectionList,
    StatusBar,
};
use crate::app::{AppState, ConfirmPrompt, Dialog};
use crate::fs::FileSystem;
use crate::picker::PickerSession;
use byte_unit::{Byte, UnitType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

const APP_TITLE: &str = " fdel: The Ultimate Auto File Deleter ";

/// Human-readable size
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{adjusted:.1}")
}

fn shell_buttons(app: &AppState) -> Vec<ButtonSpec> {
    vec![
        ButtonSpec::new("b", "Base dir", Button::ChooseBase),
        ButtonSpec::new("s", "Select files", Button::SelectFiles),
        ButtonSpec::new("d", "Delete selected", Button::DeleteSelected)
            .enabled(!app.selection().is_empty()),
        ButtonSpec::new("D", "Delete all", Button::DeleteAll),
        ButtonSpec::new("t", "Theme", Button::ToggleTheme),
        ButtonSpec::new("?", "Help", Button::Help),
        ButtonSpec::new("q", "Quit", Button::Quit),
    ]
}

fn render_status(frame: &mut Frame, area: Rect, ui: &UiState) {
    let latest = ui.status.latest_message();
    let indicator = format!("{} theme ", ui.theme.kind);
    frame.render_widget(StatusBar::new(latest.as_ref(), &indicator, &ui.theme), area);
}

fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Draw the shell and its topmost dialog
pub fn render_app(frame: &mut Frame, app: &AppState, ui: &mut UiState) {
    ui.hits.clear();
    let area = frame.area();
    let [header, list, status, buttons] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui.theme.border_style())
        .title(APP_TITLE);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("Base directory: {}", app.base_dir().display()),
            ui.theme.normal_style(),
        ))
        .block(header_block),
        header,
    );

    ui.selection_rows = SelectionList::visible_rows(list);
    let len = app.selection().len();
    ui.scroll_selection(0, len);
    let title = format!(
        " Selected ({}, {}) ",
        len,
        format_size(app.selected_size())
    );
    frame.render_widget(
        SelectionList::new(app.selection(), app.base_dir(), ui.selection_scroll, &ui.theme)
            .title(title),
        list,
    );

    render_status(frame, status, ui);

    let specs = shell_buttons(app);
    let bar = ButtonBar::new(&specs, &ui.theme);
    ui.hits.extend_buttons(bar.hit_areas(buttons));
    frame.render_widget(bar, buttons);

    match app.dialogs().top() {
        Some(Dialog::Picker { session, .. }) => {
            ui.hits.clear();
            render_picker(frame, centered(area, 90, 90), &**session, ui);
        }
        Some(Dialog::Confirm(prompt)) => {
            ui.hits.clear();
            render_confirm(frame, area, prompt, ui);
        }
        None => {}
    }

    if ui.mode == Mode::Help {
        ui.hits.clear();
        frame.render_widget(HelpOverlay::new(&ui.theme), area);
    }
}

/// Draw a picker filling the terminal, with a status bar below
pub fn render_standalone_picker<F: FileSystem>(
    frame: &mut Frame,
    session: &PickerSession<F>,
    ui: &mut UiState,
) {
    ui.hits.clear();
    let area = frame.area();
    let [picker, status] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).areas(area);
    render_picker(frame, picker, session, ui);
    render_status(frame, status, ui);

    if ui.mode == Mode::Help {
        ui.hits.clear();
        frame.render_widget(HelpOverlay::new(&ui.theme), area);
    }
}

fn render_confirm(frame: &mut Frame, area: Rect, prompt: &ConfirmPrompt, ui: &mut UiState) {
    let layout = ConfirmDialog::layout(prompt, area);
    ui.hits
        .extend_buttons([(layout.yes, Button::Yes), (layout.no, Button::No)]);
    frame.render_widget(ConfirmDialog::new(prompt, &ui.theme), area);
}

/// Draw a picker dialog into `area`
pub fn render_picker<F: FileSystem>(
    frame: &mut Frame,
    area: Rect,
    session: &PickerSession<F>,
    ui: &mut UiState,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui.theme.cursor_style())
        .title(format!(" {} ", session.title()))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [toolbar, location, grid, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Toolbar: navigation buttons, mode on the right
    let hidden_label = if session.show_hidden() {
        "Hide hidden"
    } else {
        "Show hidden"
    };
    let tools = vec![
        ButtonSpec::new("u", "Up", Button::Up).enabled(session.can_go_up()),
        ButtonSpec::new("~", "Home", Button::Home),
        ButtonSpec::new("h", hidden_label, Button::ToggleHidden),
    ];
    let tool_bar = ButtonBar::new(&tools, &ui.theme);
    ui.hits.extend_buttons(tool_bar.hit_areas(toolbar));
    frame.render_widget(tool_bar, toolbar);

    let mode = if session.is_multi_select() {
        format!("{} mode, multi-select", session.mode())
    } else {
        format!("{} mode", session.mode())
    };
    frame.render_widget(
        Paragraph::new(Line::styled(mode, ui.theme.dimmed_style())).alignment(Alignment::Right),
        toolbar,
    );

    // Location field
    ui.hits
        .push(location, HitTarget::Button(Button::Location));
    frame.render_widget(
        LocationBar::new(session.location(), &ui.theme).focused(ui.picker.location_focused),
        location,
    );

    // Entry grid
    let entries = session.listing();
    let grid_inner = EntryGrid::inner(grid);
    ui.picker.columns = EntryGrid::columns_for(grid_inner.width);
    ui.picker.rows = usize::from(grid_inner.height.max(1));
    ui.picker.scroll_to(session.cursor());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(cell) = EntryGrid::cell_rect(grid_inner, ui.picker.scroll_row, index) {
            ui.hits.push(cell, HitTarget::Entry(entry.path.clone()));
        }
    }
    frame.render_widget(
        EntryGrid::new(
            &entries,
            session.selection(),
            session.cursor(),
            ui.picker.scroll_row,
            &ui.theme,
        ),
        grid,
    );

    // Footer: summary on the left, cancel/confirm on the right
    let actions = vec![
        ButtonSpec::new("Esc", "Cancel", Button::Cancel),
        ButtonSpec::new("c", session.confirm_label(), Button::Confirm)
            .enabled(session.can_confirm()),
    ];
    let [summary, buttons] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(ButtonBar::total_width(&actions)),
    ])
    .areas(footer);
    frame.render_widget(
        Paragraph::new(Line::styled(session.summary(), ui.theme.info_style())),
        summary,
    );
    let action_bar = ButtonBar::new(&actions, &ui.theme).right_aligned();
    ui.hits.extend_buttons(action_bar.hit_areas(buttons));
    frame.render_widget(action_bar, buttons);
}
