//! Process-lifetime record of created temp directories.
//!
//! The registry starts empty, grows on every tracked creation and is drained by
//! [`DirectoryRegistry::clean`]. Nothing is persisted and nothing is cleaned up
//! implicitly on drop.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::remover::{DirRemover, FsRemover, Removal};

/// Per-path outcome of a sweep, in tracking order.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Every path the sweep targeted.
    pub attempted: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    /// Already gone before the sweep reached it.
    pub missing: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, std::io::Error)>,
}

impl CleanReport {
    /// Paths that are confirmed absent after the sweep.
    pub fn confirmed(&self) -> Vec<PathBuf> {
        self.attempted
            .iter()
            .filter(|p| !self.failed.iter().any(|(f, _)| f == *p))
            .cloned()
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn into_attempted(self) -> Vec<PathBuf> {
        self.attempted
    }
}

/// Ordered set of created directories plus the remover used to delete them.
pub struct DirectoryRegistry {
    dirs: Mutex<Vec<PathBuf>>,
    remover: Box<dyn DirRemover>,
}

impl Default for DirectoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DirectoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryRegistry")
            .field("dirs", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl DirectoryRegistry {
    pub fn new() -> Self {
        Self::with_remover(Box::new(FsRemover::new()))
    }

    pub fn with_remover(remover: Box<dyn DirRemover>) -> Self {
        Self {
            dirs: Mutex::new(Vec::new()),
            remover,
        }
    }

    // The set only holds plain paths, so a panic mid-update cannot leave it
    // inconsistent; recover from poisoning instead of propagating it.
    fn lock(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.dirs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a directory. Returns false if it was already tracked.
    pub fn track(&self, path: PathBuf) -> bool {
        let mut dirs = self.lock();
        if dirs.iter().any(|p| *p == path) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), tracked = dirs.len() + 1, "tracking temp directory");
        dirs.push(path);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lock().iter().any(|p| p == path)
    }

    /// Snapshot of the tracked paths in creation order.
    pub fn tracked(&self) -> Vec<PathBuf> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Delete every tracked directory and clear the set.
    ///
    /// Returns the targeted paths in creation order, whether or not each
    /// deletion succeeded. Use [`clean_report`](Self::clean_report) to tell
    /// them apart.
    pub fn clean(&self) -> Vec<PathBuf> {
        self.clean_report().into_attempted()
    }

    pub fn clean_report(&self) -> CleanReport {
        // Drain under the lock, delete outside it.
        let drained = std::mem::take(&mut *self.lock());

        let mut report = CleanReport {
            attempted: Vec::with_capacity(drained.len()),
            ..CleanReport::default()
        };

        for path in drained {
            match self.remover.remove_dir_all(&path) {
                Ok(Removal::Removed) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(path = %path.display(), "removed temp directory");
                    report.removed.push(path.clone());
                }
                Ok(Removal::Missing) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(path = %path.display(), "temp directory already gone");
                    report.missing.push(path.clone());
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove temp directory");
                    report.failed.push((path.clone(), e));
                }
            }
            report.attempted.push(path);
        }

        report
    }
}
