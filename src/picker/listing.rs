//! Directory listing rules for the picker

use super::request::PickerMode;
use crate::fs::{Entry, FileSystem};
use std::cmp::Ordering;
use std::path::Path;

/// Sort entries directories-first, then by name
///
/// The sort is stable.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
}

/// List `dir` the way the picker shows it
///
/// Directory mode keeps only directories; dot-prefixed names are dropped
/// unless `show_hidden`. An unreadable directory lists as empty.
pub fn list_entries<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    mode: PickerMode,
    show_hidden: bool,
) -> Vec<Entry> {
    let mut entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };
    sort_entries(&mut entries);
    entries.retain(|entry| {
        (mode == PickerMode::File || entry.is_dir) && (show_hidden || !entry.is_hidden())
    });
    entries
}
