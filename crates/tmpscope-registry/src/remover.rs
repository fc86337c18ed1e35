//! Recursive-delete backends used by the cleaner.

use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a successful removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// Nothing was there; counts as clean.
    Missing,
}

/// Abstract recursive delete.
///
/// Implemented by [`FsRemover`] for the host filesystem.
pub trait DirRemover: Send + Sync {
    /// Remove `path` and everything below it. Idempotent: a missing path
    /// yields `Ok(Removal::Missing)`.
    fn remove_dir_all(&self, path: &Path) -> io::Result<Removal>;
}

/// Host filesystem remover.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRemover;

impl FsRemover {
    pub fn new() -> Self {
        Self
    }
}

impl DirRemover for FsRemover {
    fn remove_dir_all(&self, path: &Path) -> io::Result<Removal> {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(Removal::Removed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::Missing),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("tmpscope-remover-tests-{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_fs_remover_removes_tree() {
        let dir = scratch("tree");
        fs::create_dir_all(dir.join("a/b")).unwrap();
        fs::write(dir.join("a/b/file.txt"), b"data").unwrap();

        let outcome = FsRemover::new().remove_dir_all(&dir).unwrap();
        assert_eq!(outcome, Removal::Removed);
        assert!(!dir.exists());
    }

    #[test]
    fn test_fs_remover_missing_is_ok() {
        let dir = scratch("missing");
        let outcome = FsRemover::new().remove_dir_all(&dir).unwrap();
        assert_eq!(outcome, Removal::Missing);
    }
}
