//! Diagnostic logging
//!
//! The terminal belongs to the TUI, so log lines go to a file instead of
//! stderr. The filter comes from `FDEL_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`. Failing to open the log file disables logging; it
//! never stops the program.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FDEL_LOG";

const DEFAULT_FILTER: &str = "info";

/// `<data_local_dir>/fdel/fdel.log`
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("fdel").join("fdel.log"))
}

/// Open `path` for appending, creating parent directories
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_file` (or the default path)
///
/// Returns the path being logged to, or `None` when logging is disabled.
pub fn init_logging(log_file: Option<&Path>) -> Option<PathBuf> {
    let path = log_file.map(Path::to_path_buf).or_else(default_log_path)?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("fdel: logging disabled, cannot open {}: {err}", path.display());
            return None;
        }
    };

    fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()
        .map(|()| path)
}
