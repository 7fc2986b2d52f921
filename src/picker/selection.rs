//! Ordered, duplicate-free selection of paths

use std::path::{Path, PathBuf};

/// The paths selected in a picker session, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    paths: Vec<PathBuf>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Build a selection from paths, keeping the first occurrence of duplicates
    #[must_use]
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut selection = Self::new();
        for path in paths {
            selection.insert(path);
        }
        selection
    }

    /// Append a path unless it is already selected
    ///
    /// Returns `true` if the path was added.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// Remove a path
    ///
    /// Returns `true` if the path was selected.
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| p != path);
        self.paths.len() != before
    }

    /// Add the path if absent, remove it if present
    pub fn toggle(&mut self, path: &Path) {
        if !self.remove(path) {
            self.paths.push(path.to_path_buf());
        }
    }

    /// Make `path` the only selected entry
    pub fn replace(&mut self, path: PathBuf) {
        self.paths.clear();
        self.paths.push(path);
    }

    /// Whether `path` is selected
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Number of selected entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// First selected entry
    #[must_use]
    pub fn first(&self) -> Option<&Path> {
        self.paths.first().map(PathBuf::as_path)
    }

    /// Selected paths in selection order
    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Consume into the selected paths
    #[must_use]
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_order() {
        let mut selection = Selection::new();
        selection.toggle(Path::new("a"));
        selection.toggle(Path::new("b"));
        selection.toggle(Path::new("c"));
        selection.toggle(Path::new("b"));

        assert_eq!(selection.as_slice(), &[PathBuf::from("a"), PathBuf::from("c")]);
    }

    #[test]
    fn test_from_paths_dedups() {
        let selection = Selection::from_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.first(), Some(Path::new("a")));
    }

    #[test]
    fn test_replace() {
        let mut selection = Selection::from_paths(vec![PathBuf::from("a"), PathBuf::from("b")]);
        selection.replace(PathBuf::from("z"));
        assert_eq!(selection.into_vec(), vec![PathBuf::from("z")]);
    }
}
