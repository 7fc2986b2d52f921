//! fdel application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the shell in the home directory (or the configured base directory)
//! fdel
//!
//! # Open the shell elsewhere, with files already selected
//! fdel --base-dir ~/Downloads setup.exe old.zip
//!
//! # Standalone picker for scripts; exits 1 when cancelled
//! fdel pick --directory
//! fdel pick --multi --json --title "Files to archive"
//!
//! # Delete without the TUI
//! fdel delete --dry-run a.txt build
//! fdel delete --yes a.txt
//!
//! # Configuration
//! fdel config path
//! fdel config init
//! ```
//!
//! Logs go to `<data_local_dir>/fdel/fdel.log`; set `FDEL_LOG=debug` for
//! more detail.

use colored::Colorize;
use fdel::{
    FdelError, Result,
    app::{AppState, delete_paths},
    cli::{Cli, Commands, ConfigCommands},
    config::FdelConfig,
    fs::{self, FileSystem, StdFileSystem},
    logging,
    picker::{PickerMode, PickerOutcome, PickerRequest},
    ui::{
        OutputWriter, StdoutWriter,
        ratatui_adapter::{Theme, UiState, run_app, run_picker},
    },
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Exit status for errors, distinct from a cancelled picker (1)
const ERROR_EXIT: u8 = 2;

/// Prompt user for yes/no confirmation
///
/// # Errors
/// Returns `FdelError` if I/O operations fail.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim().to_lowercase();

    Ok(matches!(response.as_str(), "y" | "yes"))
}

/// Make a command-line path absolute against the working directory
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Base directory from the command line, then config, then home
fn resolve_base_dir(cli_dir: Option<&Path>, config: &FdelConfig) -> Result<PathBuf> {
    let dir = cli_dir
        .map(Path::to_path_buf)
        .or_else(|| config.base_directory.clone())
        .unwrap_or_else(fs::home_dir);
    let dir = dir.canonicalize().map_err(|e| {
        FdelError::InvalidInput(format!("Cannot use base directory {}: {e}", dir.display()))
    })?;
    if !dir.is_dir() {
        return Err(FdelError::InvalidInput(format!(
            "Base directory is not a directory: {}",
            dir.display()
        )));
    }
    Ok(dir)
}

fn default_pick_title(mode: PickerMode, multi: bool) -> &'static str {
    match (mode, multi) {
        (PickerMode::File, false) => "Choose a file",
        (PickerMode::File, true) => "Choose files",
        (PickerMode::Directory, false) => "Choose a directory",
        (PickerMode::Directory, true) => "Choose directories",
    }
}

fn ui_state(config: &FdelConfig) -> UiState {
    UiState::new(Theme::from_kind(config.theme), config.message_ttl())
}

fn handle_shell(cli: &Cli, config: &FdelConfig) -> Result<ExitCode> {
    let output = StdoutWriter::new();
    let mut settings = config.app_settings();
    settings.show_hidden |= cli.show_hidden;
    let base_dir = resolve_base_dir(cli.base_dir.as_deref(), config)?;

    let paths: Vec<PathBuf> = cli.paths.iter().map(|path| absolute(path)).collect();
    for path in paths.iter().filter(|path| !StdFileSystem.is_file(path)) {
        output.warning(&format!("Skipping {}: not an existing file", path.display()));
    }

    let mut app = AppState::new(base_dir, settings).with_selection(paths);
    let mut ui = ui_state(config);
    run_app(&mut app, &mut ui)?;
    info!("shell closed");
    Ok(ExitCode::SUCCESS)
}

fn handle_pick(cli: &Cli, command: &Commands, config: &FdelConfig) -> Result<ExitCode> {
    let Commands::Pick {
        multi,
        title,
        json,
        base_dir,
        preselect,
        ..
    } = command
    else {
        return Err(FdelError::InvalidInput("expected the pick command".into()));
    };
    let mode = command.picker_mode().unwrap_or(PickerMode::File);
    let title = title
        .clone()
        .unwrap_or_else(|| default_pick_title(mode, *multi).to_string());
    let base_dir = resolve_base_dir(base_dir.as_deref(), config)?;

    let mut session = PickerRequest::new(title, base_dir, mode)
        .multi_select(*multi)
        .preselected(preselect.iter().map(|path| absolute(path)).collect())
        .show_hidden(config.show_hidden || cli.show_hidden)
        .double_click(config.double_click())
        .open()?;
    let mut ui = ui_state(config);

    match run_picker(&mut session, &mut ui)? {
        PickerOutcome::Confirmed(paths) => {
            if *json {
                println!("{}", serde_json::to_string(&paths)?);
            } else {
                for path in &paths {
                    println!("{}", path.display());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        PickerOutcome::Cancelled => {
            info!("picker cancelled");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_delete(dry_run: bool, yes: bool, paths: &[PathBuf]) -> Result<ExitCode> {
    let output = StdoutWriter::new();
    let paths: Vec<PathBuf> = paths.iter().map(|path| absolute(path)).collect();

    if dry_run {
        for path in &paths {
            let kind = if StdFileSystem.is_symlink(path) {
                "link"
            } else if StdFileSystem.is_dir(path) {
                "directory"
            } else if StdFileSystem.is_file(path) {
                "file"
            } else {
                "missing"
            };
            output.write(&format!("Would delete ({kind}): {}", path.display()));
        }
        return Ok(ExitCode::SUCCESS);
    }

    if !yes && !confirm(&format!("Delete {} item(s)?", paths.len()))? {
        output.info("Nothing deleted");
        return Ok(ExitCode::SUCCESS);
    }

    let report = delete_paths(&StdFileSystem, &paths);
    report.write_to(&output);
    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_config(cli: &Cli, command: ConfigCommands) -> Result<ExitCode> {
    let output = StdoutWriter::new();
    let path = FdelConfig::resolve_path(cli.config_path())?;
    match command {
        ConfigCommands::Path => {
            output.write(&path.display().to_string());
        }
        ConfigCommands::Show => {
            let config = FdelConfig::load(Some(&path))?;
            output.write(config.to_toml()?.trim_end());
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(FdelError::InvalidInput(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            FdelConfig::default().save_to(&path)?;
            output.success(&format!("Wrote {}", path.display()));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Some(Commands::Config { command }) => handle_config(cli, *command),
        Some(Commands::Delete {
            dry_run,
            yes,
            paths,
        }) => handle_delete(*dry_run, *yes, paths),
        Some(command @ Commands::Pick { .. }) => {
            let config = FdelConfig::load(cli.config_path())?;
            handle_pick(cli, command, &config)
        }
        None => {
            let config = FdelConfig::load(cli.config_path())?;
            handle_shell(cli, &config)
        }
    }
}

/// Main entry point for the fdel application
///
/// Parses command-line arguments, sets up logging, and dispatches to the
/// appropriate command handler. Errors are printed in red and exit with
/// status 2.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let log_path = logging::init_logging(cli.log_file.as_deref());
    debug!(?log_path, command = ?cli.command, "starting");

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "fdel failed");
            eprintln!("{} {err}", "Error:".red().bold());
            ExitCode::from(ERROR_EXIT)
        }
    }
}
