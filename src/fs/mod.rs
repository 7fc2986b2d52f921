//! Filesystem access for the picker and the delete actions
//!
//! Everything here is a thin, synchronous view over live filesystem state.
//! Nothing is cached: an [`Entry`] reflects the filesystem at the time it
//! was built and may be stale a moment later.

use std::io;
use std::path::{Component, Path, PathBuf};

/// A filesystem path with the attributes the picker cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path of the entry
    pub path: PathBuf,
    /// Base name (last path component)
    pub name: String,
    /// Whether the path was a directory when listed
    pub is_dir: bool,
}

impl Entry {
    /// Build an entry from a path, deriving its name
    #[must_use]
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self { path, name, is_dir }
    }

    /// Hidden by naming convention (dot-prefixed)
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

/// Whether a file name is hidden by the dot-prefix convention
#[must_use]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Filesystem operations consumed by the picker and the shell
///
/// All calls are synchronous and reflect live state at call time.
pub trait FileSystem {
    /// List the entries of a directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>>;

    /// Whether the path exists
    fn exists(&self, path: &Path) -> bool;

    /// Whether the path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether the path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Whether the path itself is a symbolic link (not followed)
    fn is_symlink(&self, path: &Path) -> bool;

    /// Delete a file
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Delete an empty directory
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, including when the directory is not empty.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Parent directory, if any
    fn parent(&self, path: &Path) -> Option<PathBuf> {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(dir)? {
            let Ok(dir_entry) = dir_entry else {
                continue;
            };
            let path = dir_entry.path();
            // Follow symlinks so a link to a directory behaves like one
            let is_dir = path.is_dir();
            entries.push(Entry::new(path, is_dir));
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.is_symlink()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir(path)
    }
}

/// The user's home directory
///
/// Falls back to the filesystem root when no home directory can be determined.
#[must_use]
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
}

/// Display `path` relative to `base`, or as-is when it is outside `base`
#[must_use]
pub fn display_relative(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// `path` relative to `base`, stepping up with `..` where needed
///
/// Returns `path` unchanged when the two share no common root (for
/// example different drive prefixes).
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return path.to_path_buf();
    }

    let mut rel: PathBuf = base_parts[common..]
        .iter()
        .map(|_| Component::ParentDir)
        .collect();
    rel.extend(&path_parts[common..]);
    if rel.as_os_str().is_empty() {
        rel.push(Component::CurDir);
    }
    rel
}
