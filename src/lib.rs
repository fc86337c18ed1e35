#![forbid(unsafe_code)]
//! tmpscope: unique temporary file and directory paths with tracked cleanup.
//!
//! The free functions here operate on one process-wide [`TempSpace`], created on
//! first use from [`TempConfig::from_env`] and never torn down. Directories it
//! creates are tracked until [`clean`] is called; nothing is persisted.
//!
//! ```no_run
//! use tmpscope::PathOptions;
//!
//! let png = tmpscope::file(&PathOptions::extension("png"))?;
//! let dir = tmpscope::directory()?;
//! let removed = tmpscope::clean();
//! assert!(removed.contains(&dir));
//!
//! let exists = tmpscope::job(|dir| Ok::<_, tmpscope::Error>(dir.is_dir()))?;
//! assert!(exists);
//! # let _ = png;
//! # Ok::<(), tmpscope::Error>(())
//! ```
//!
//! For an isolated registry (tests, libraries that must not share state), build
//! your own [`TempSpace`].

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

pub use tmpscope_core::prelude::*;
pub use tmpscope_exec::{JobDirGuard, TempSpace};
pub use tmpscope_registry::{CleanReport, DirRemover, DirectoryRegistry, FsRemover, Removal};

static SPACE: Lazy<TempSpace> = Lazy::new(TempSpace::from_env);

/// The process-wide temp space.
pub fn space() -> &'static TempSpace {
    &SPACE
}

/// A temporary file path you can write to. See [`TempSpace::file`].
pub fn file(opts: &PathOptions) -> Result<PathBuf> {
    SPACE.file(opts)
}

/// A freshly created, tracked temporary directory.
pub fn directory() -> Result<PathBuf> {
    SPACE.directory()
}

/// Delete every tracked directory; returns the attempted paths in creation order.
pub fn clean() -> Vec<PathBuf> {
    SPACE.clean()
}

pub fn clean_report() -> CleanReport {
    SPACE.clean_report()
}

/// Run `task` with a temporary directory that is deleted once it returns.
pub fn job<T, E, F>(task: F) -> std::result::Result<T, E>
where
    F: FnOnce(&Path) -> std::result::Result<T, E>,
    E: From<Error>,
{
    SPACE.job(task)
}

#[cfg(feature = "async")]
pub async fn job_async<T, E, F, Fut>(task: F) -> std::result::Result<T, E>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: std::future::Future<Output = std::result::Result<T, E>>,
    E: From<Error>,
{
    SPACE.job_async(task).await
}

/// The resolved temp root, e.g. `/tmp`.
pub fn root() -> &'static Path {
    SPACE.root()
}
