//! Integration tests for fdel
//!
//! These tests drive picker sessions and the application shell against
//! real temporary directory trees, the way the terminal frontend does.

use fdel::app::{AppEvent, AppSettings, AppState, Dialog};
use fdel::picker::{
    Activation, PickerError, PickerMode, PickerOutcome, PickerRequest, PickerSession,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Helper function to create a canonical temporary root
fn setup_tree() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().canonicalize().unwrap();
    (dir, root)
}

/// Helper function to create a test file, with parents
fn create_test_file(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "test content").unwrap();
}

fn names(session: &PickerSession) -> Vec<String> {
    session.listing().into_iter().map(|entry| entry.name).collect()
}

fn top_session(app: &mut AppState) -> &mut PickerSession {
    match app.dialogs_mut().top_mut() {
        Some(Dialog::Picker { session, .. }) => &mut **session,
        other => panic!("expected picker on top, got {other:?}"),
    }
}

// ============================================================================
// Picker
// ============================================================================

#[test]
fn test_open_then_cancel_is_cancelled() {
    let (_dir, root) = setup_tree();
    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();

    session.cancel();

    assert!(session.is_complete());
    assert_eq!(session.take_outcome(), Some(PickerOutcome::Cancelled));
    assert_eq!(session.take_outcome(), None);
}

#[test]
fn test_invalid_base_directory_is_rejected_before_opening() {
    let (_dir, root) = setup_tree();
    let missing = root.join("gone");

    let err = PickerRequest::new("Pick", &missing, PickerMode::Directory)
        .open()
        .unwrap_err();

    assert_eq!(err, PickerError::InvalidBaseDirectory(missing));
}

#[test]
fn test_listing_sorts_directories_first_then_by_name() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("b.txt"));
    create_test_file(&root.join("a.txt"));
    fs::create_dir(root.join("A")).unwrap();

    let session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();

    assert_eq!(names(&session), vec!["A", "a.txt", "b.txt"]);
}

#[test]
fn test_hidden_entries_follow_toggle() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join(".env"));
    create_test_file(&root.join("visible.txt"));

    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();
    assert_eq!(names(&session), vec!["visible.txt"]);

    session.toggle_hidden();
    assert_eq!(names(&session), vec![".env", "visible.txt"]);
}

#[test]
fn test_directory_mode_lists_only_directories() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("file.txt"));
    fs::create_dir(root.join("sub")).unwrap();

    let session = PickerRequest::new("Pick", &root, PickerMode::Directory)
        .open()
        .unwrap();

    assert_eq!(names(&session), vec!["sub"]);
}

#[test]
fn test_listing_reflects_filesystem_changes() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    let session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();
    assert_eq!(names(&session), vec!["a.txt"]);

    fs::remove_file(root.join("a.txt")).unwrap();
    create_test_file(&root.join("b.txt"));

    assert_eq!(names(&session), vec!["b.txt"]);
}

#[test]
fn test_double_click_directory_navigates_and_keeps_selection() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("keep.txt"));
    fs::create_dir(root.join("docs")).unwrap();
    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .multi_select(true)
        .preselected(vec![root.join("keep.txt")])
        .open()
        .unwrap();

    let start = Instant::now();
    assert_eq!(session.click(&root.join("docs"), start), Activation::Single);
    assert_eq!(
        session.click(&root.join("docs"), start + Duration::from_millis(100)),
        Activation::Double
    );

    assert_eq!(session.current_dir(), root.join("docs"));
    assert_eq!(session.selection().as_slice(), &[root.join("keep.txt")]);
    assert_eq!(session.location().text, root.join("docs").display().to_string());
}

#[test]
fn test_slow_clicks_are_two_single_clicks() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .multi_select(true)
        .open()
        .unwrap();

    let start = Instant::now();
    session.click(&root.join("a.txt"), start);
    let second = session.click(&root.join("a.txt"), start + Duration::from_millis(800));

    assert_eq!(second, Activation::Single);
    assert!(session.selection().is_empty());
}

#[test]
fn test_single_select_never_holds_more_than_one() {
    let (_dir, root) = setup_tree();
    for name in ["a.txt", "b.txt", "c.txt"] {
        create_test_file(&root.join(name));
    }
    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();

    for name in ["a.txt", "b.txt", "c.txt", "a.txt"] {
        session.activate(&root.join(name), Activation::Single);
        assert_eq!(session.selection().len(), 1);
    }
    assert_eq!(session.selection().as_slice(), &[root.join("a.txt")]);
}

#[test]
fn test_directory_mode_confirm_with_empty_selection_uses_current_dir() {
    let (_dir, root) = setup_tree();
    fs::create_dir(root.join("sub")).unwrap();
    let mut session = PickerRequest::new("Pick", &root, PickerMode::Directory)
        .open()
        .unwrap();

    assert!(session.uses_current_directory());
    assert_eq!(session.confirm_label(), "Select this directory");
    assert!(session.confirm());
    assert_eq!(
        session.take_outcome(),
        Some(PickerOutcome::Confirmed(vec![root.clone()]))
    );
}

#[test]
fn test_directory_mode_confirm_selected_subdirectory() {
    let (_dir, root) = setup_tree();
    fs::create_dir(root.join("sub")).unwrap();
    let mut session = PickerRequest::new("Pick", &root, PickerMode::Directory)
        .open()
        .unwrap();

    session.activate(&root.join("sub"), Activation::Single);
    assert_eq!(session.confirm_label(), "Confirm selection");
    assert_eq!(session.summary(), "Selected directory: sub");
    session.confirm();

    assert_eq!(
        session.take_outcome(),
        Some(PickerOutcome::Confirmed(vec![root.join("sub")]))
    );
}

#[test]
fn test_scenario_navigate_into_docs_and_pick_readme() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("docs/readme.txt"));
    let mut session = PickerRequest::new("Choose files", &root, PickerMode::File)
        .multi_select(true)
        .open()
        .unwrap();

    session.activate(&root.join("docs"), Activation::Double);
    assert_eq!(names(&session), vec!["readme.txt"]);
    session.click(&root.join("docs/readme.txt"), Instant::now());
    assert!(session.confirm());

    let paths = session.take_outcome().and_then(PickerOutcome::into_paths).unwrap();
    let file_names: Vec<_> = paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(file_names, vec!["readme.txt"]);
}

#[test]
fn test_scenario_preselection_toggle_then_confirm() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    create_test_file(&root.join("b.txt"));
    let mut session = PickerRequest::new("Choose files", &root, PickerMode::File)
        .multi_select(true)
        .preselected(vec![root.join("a.txt"), root.join("b.txt")])
        .open()
        .unwrap();

    session.click(&root.join("a.txt"), Instant::now());
    session.confirm();

    assert_eq!(
        session.take_outcome(),
        Some(PickerOutcome::Confirmed(vec![root.join("b.txt")]))
    );
}

#[test]
fn test_double_click_file_in_single_select_completes() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("only.txt"));
    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();

    session.activate(&root.join("only.txt"), Activation::Double);

    assert_eq!(
        session.take_outcome(),
        Some(PickerOutcome::Confirmed(vec![root.join("only.txt")]))
    );
    // Completed sessions ignore further input
    session.activate(&root.join("only.txt"), Activation::Single);
    assert!(session.selection().is_empty());
}

#[test]
fn test_invalid_location_keeps_text_and_directory() {
    let (_dir, root) = setup_tree();
    fs::create_dir(root.join("sub")).unwrap();
    let mut session = PickerRequest::new("Pick", &root, PickerMode::File)
        .open()
        .unwrap();

    let typed = root.join("nope").display().to_string();
    session.set_location_text(typed.clone());
    assert!(!session.location().valid);
    assert_eq!(session.location().text, typed);
    assert_eq!(session.current_dir(), root);

    session.set_location_text(root.join("sub").display().to_string());
    assert!(session.location().valid);
    assert_eq!(session.current_dir(), root.join("sub"));

    session.go_up();
    assert_eq!(session.current_dir(), root);
    assert_eq!(session.location().text, root.display().to_string());
}

#[test]
fn test_preselection_validation() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    create_test_file(&root.join("b.txt"));
    fs::create_dir(root.join("sub")).unwrap();

    let err = PickerRequest::new("Pick", &root, PickerMode::Directory)
        .preselected(vec![root.join("a.txt")])
        .open()
        .unwrap_err();
    assert_eq!(err, PickerError::PreselectionNotDirectory(root.join("a.txt")));

    let err = PickerRequest::new("Pick", &root, PickerMode::File)
        .preselected(vec![root.join("sub")])
        .open()
        .unwrap_err();
    assert_eq!(err, PickerError::PreselectionNotFile(root.join("sub")));

    let err = PickerRequest::new("Pick", &root, PickerMode::File)
        .preselected(vec![root.join("a.txt"), root.join("b.txt")])
        .open()
        .unwrap_err();
    assert_eq!(err, PickerError::TooManyPreselected(2));

    // Missing entries are dropped rather than rejected
    let session = PickerRequest::new("Pick", &root, PickerMode::File)
        .preselected(vec![root.join("missing.txt"), root.join("a.txt")])
        .open()
        .unwrap();
    assert_eq!(session.selection().as_slice(), &[root.join("a.txt")]);
}

// ============================================================================
// Application shell
// ============================================================================

#[test]
fn test_shell_select_files_then_delete_selected() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    create_test_file(&root.join("b.txt"));
    let mut app = AppState::new(root.clone(), AppSettings::default());

    app.select_files().unwrap();
    let session = top_session(&mut app);
    session.activate(&root.join("a.txt"), Activation::Single);
    session.activate(&root.join("b.txt"), Activation::Single);
    session.confirm();

    assert!(matches!(app.poll_dialogs(), Some(AppEvent::SelectionReplaced(2))));
    assert!(app.dialogs().is_empty());
    assert_eq!(app.selection(), &[root.join("a.txt"), root.join("b.txt")]);

    let report = app.delete_selected();
    assert!(report.is_clean());
    assert_eq!(report.deleted.len(), 2);
    assert!(!root.join("a.txt").exists());
    assert!(app.selection().is_empty());
}

#[test]
fn test_shell_cancelled_picker_keeps_selection() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    create_test_file(&root.join("b.txt"));
    let mut app = AppState::new(root.clone(), AppSettings::default())
        .with_selection(vec![root.join("a.txt")]);

    app.select_files().unwrap();
    let session = top_session(&mut app);
    assert_eq!(session.selection().as_slice(), &[root.join("a.txt")]);
    session.activate(&root.join("b.txt"), Activation::Single);
    session.cancel();

    assert!(matches!(app.poll_dialogs(), Some(AppEvent::PickerCancelled)));
    assert_eq!(app.selection(), &[root.join("a.txt")]);
}

#[test]
fn test_shell_delete_selected_clears_selection_even_on_failure() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    create_test_file(&root.join("b.txt"));
    let mut app = AppState::new(root.clone(), AppSettings::default())
        .with_selection(vec![root.join("a.txt"), root.join("b.txt")]);

    // Removed behind the shell's back
    fs::remove_file(root.join("a.txt")).unwrap();
    let report = app.delete_selected();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, root.join("a.txt"));
    assert_eq!(report.deleted, vec![root.join("b.txt")]);
    assert!(app.selection().is_empty());
}

#[test]
fn test_shell_choose_base_directory() {
    let (_dir, root) = setup_tree();
    fs::create_dir(root.join("projects")).unwrap();
    let mut app = AppState::new(root.clone(), AppSettings::default());

    app.choose_base_directory().unwrap();
    let session = top_session(&mut app);
    session.activate(&root.join("projects"), Activation::Double);
    session.confirm();

    assert!(matches!(
        app.poll_dialogs(),
        Some(AppEvent::BaseDirectoryChanged(dir)) if dir == root.join("projects")
    ));
    assert_eq!(app.base_dir(), root.join("projects"));
}

#[test]
fn test_shell_picker_error_opens_no_dialog() {
    let (dir, root) = setup_tree();
    let mut app = AppState::new(root.clone(), AppSettings::default());
    drop(dir);

    assert!(matches!(
        app.select_files(),
        Err(PickerError::InvalidBaseDirectory(_))
    ));
    assert!(app.dialogs().is_empty());
}

#[test]
fn test_shell_delete_all_is_inert() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    let mut app = AppState::new(root.clone(), AppSettings::default())
        .with_selection(vec![root.join("a.txt")]);

    app.request_delete_all();
    assert_eq!(app.dialogs().len(), 1);
    assert!(matches!(app.resolve_confirm(true), Some(AppEvent::DeleteAllUnavailable)));

    assert!(app.dialogs().is_empty());
    assert!(root.join("a.txt").exists());
    assert_eq!(app.selection(), &[root.join("a.txt")]);
}

#[test]
fn test_shell_confirmed_delete_selected() {
    let (_dir, root) = setup_tree();
    create_test_file(&root.join("a.txt"));
    let settings = AppSettings {
        confirm_delete_selected: true,
        ..AppSettings::default()
    };
    let mut app = AppState::new(root.clone(), settings).with_selection(vec![root.join("a.txt")]);

    assert!(app.request_delete_selected().is_none());
    assert!(matches!(app.resolve_confirm(false), Some(AppEvent::ConfirmDeclined)));
    assert!(root.join("a.txt").exists());

    assert!(app.request_delete_selected().is_none());
    let event = app.resolve_confirm(true);
    assert!(matches!(event, Some(AppEvent::Deleted(report)) if report.is_clean()));
    assert!(!root.join("a.txt").exists());
}
