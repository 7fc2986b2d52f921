//! Best-effort deletion of selected paths
//!
//! Deletion is synchronous with no retry and no rollback. Failures do not
//! stop the remaining deletions; they are collected in a [`DeletionReport`].

use crate::fs::FileSystem;
use crate::ui::output::OutputWriter;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

/// A path that could not be deleted
#[derive(Debug)]
pub struct DeletionFailure {
    /// Path that was attempted
    pub path: PathBuf,
    /// Why it failed
    pub error: io::Error,
}

/// Outcome of a delete pass
#[derive(Debug, Default)]
pub struct DeletionReport {
    /// Paths that were removed
    pub deleted: Vec<PathBuf>,
    /// Paths that could not be removed
    pub failed: Vec<DeletionFailure>,
}

impl DeletionReport {
    /// Whether every path was deleted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of paths attempted
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// One-line summary for a status bar
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.deleted.len(), self.failed.len()) {
            (0, 0) => "Nothing to delete".to_string(),
            (deleted, 0) => format!("Deleted {deleted} item(s)"),
            (deleted, failed) => {
                let first = &self.failed[0];
                format!(
                    "Deleted {deleted} item(s), {failed} failed (first: {}: {})",
                    first.path.display(),
                    first.error
                )
            }
        }
    }

    /// Write the report through an output writer
    pub fn write_to(&self, output: &dyn OutputWriter) {
        for path in &self.deleted {
            output.success(&format!("Deleted: {}", path.display()));
        }
        for failure in &self.failed {
            output.error(&format!(
                "Failed to delete {}: {}",
                failure.path.display(),
                failure.error
            ));
        }
        if self.is_clean() {
            output.info(&self.summary());
        } else {
            output.warning(&self.summary());
        }
    }
}

/// Delete every path in `paths`
///
/// Directories are removed only when empty; files and symbolic links are
/// unlinked. A path that no longer exists is reported as a failure.
pub fn delete_paths<F: FileSystem + ?Sized>(fs: &F, paths: &[PathBuf]) -> DeletionReport {
    let mut report = DeletionReport::default();
    for path in paths {
        // Links are unlinked, never followed into their target
        let result = if fs.is_dir(path) && !fs.is_symlink(path) {
            fs.remove_dir(path)
        } else {
            fs.remove_file(path)
        };
        match result {
            Ok(()) => {
                info!(path = %path.display(), "deleted");
                report.deleted.push(path.clone());
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "delete failed");
                report.failed.push(DeletionFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::StdFileSystem;
    use crate::testing::TempTree;
    use crate::ui::output::{MessageLevel, StatusBarWriter};

    #[test]
    fn test_delete_files_and_empty_dirs() {
        let tree = TempTree::new().file("a.txt").dir("empty");
        let report = delete_paths(&StdFileSystem, &[tree.join("a.txt"), tree.join("empty")]);

        assert!(report.is_clean());
        assert_eq!(report.deleted.len(), 2);
        assert!(!tree.join("a.txt").exists());
        assert!(!tree.join("empty").exists());
        assert_eq!(report.summary(), "Deleted 2 item(s)");
    }

    #[test]
    fn test_failures_are_collected_and_do_not_stop() {
        let tree = TempTree::new().file("full/inner.txt").file("b.txt");
        let report = delete_paths(
            &StdFileSystem,
            &[tree.join("missing.txt"), tree.join("full"), tree.join("b.txt")],
        );

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.deleted, vec![tree.join("b.txt")]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].path, tree.join("missing.txt"));
        assert_eq!(report.failed[0].error.kind(), io::ErrorKind::NotFound);
        // Non-empty directories are left alone
        assert!(tree.join("full/inner.txt").exists());
        assert!(report.summary().starts_with("Deleted 1 item(s), 2 failed"));
    }

    #[test]
    fn test_empty_report() {
        let report = delete_paths(&StdFileSystem, &[]);
        assert!(report.is_clean());
        assert_eq!(report.summary(), "Nothing to delete");
    }

    #[test]
    fn test_write_to_status_bar() {
        let tree = TempTree::new().file("a.txt");
        let report = delete_paths(&StdFileSystem, &[tree.join("a.txt"), tree.join("gone")]);
        let writer = StatusBarWriter::new();
        report.write_to(&writer);

        let messages = writer.recent_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].0, MessageLevel::Success);
        assert_eq!(messages[1].0, MessageLevel::Error);
        assert_eq!(messages[2].0, MessageLevel::Warning);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_unlinked() {
        let tree = TempTree::new().file("target_dir/keep.txt");
        let link = tree.join("link");
        std::os::unix::fs::symlink(tree.join("target_dir"), &link).unwrap();

        let report = delete_paths(&StdFileSystem, &[link.clone()]);

        assert!(report.is_clean());
        assert_eq!(report.deleted, vec![link.clone()]);
        assert!(link.symlink_metadata().is_err());
        assert!(tree.join("target_dir/keep.txt").exists());
    }
}
