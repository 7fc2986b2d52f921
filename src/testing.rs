//! Testing utilities for fdel
//!
//! This module provides a `TempTree` builder for laying out throwaway
//! directory trees that tests can browse, select from, and delete in.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree that is removed on drop
///
/// The root path is canonicalized so it compares equal to paths the
/// picker derives from it.
///
/// # Examples
/// ```ignore
/// let tree = TempTree::new().dir("docs").file("readme.txt");
/// assert!(tree.join("docs").is_dir());
/// ```
pub struct TempTree {
    // Held for its Drop impl
    _dir: TempDir,
    root: PathBuf,
}

impl TempTree {
    /// Create an empty temporary tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().canonicalize().expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// Add a directory (and any missing parents)
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn dir(self, rel: impl AsRef<Path>) -> Self {
        fs::create_dir_all(self.root.join(rel)).expect("Failed to create test dir");
        self
    }

    /// Add a file with default content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn file(self, rel: impl AsRef<Path>) -> Self {
        self.file_with_content(rel, b"test content")
    }

    /// Add a file with custom content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn file_with_content(self, rel: impl AsRef<Path>, content: &[u8]) -> Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(content).expect("Failed to write test file");
        self
    }

    /// Root of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of an entry inside the tree
    #[must_use]
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_layout() {
        let tree = TempTree::new()
            .dir("docs/nested")
            .file("readme.txt")
            .file_with_content("docs/notes.md", b"# notes");

        assert!(tree.join("docs/nested").is_dir());
        assert!(tree.join("readme.txt").is_file());
        assert_eq!(fs::read(tree.join("docs/notes.md")).unwrap(), b"# notes");
    }

    #[test]
    fn test_tree_cleanup() {
        let root;
        {
            let tree = TempTree::new().file("a.txt");
            root = tree.path().to_path_buf();
            assert!(root.exists());
        }

        assert!(!root.exists());
    }
}
