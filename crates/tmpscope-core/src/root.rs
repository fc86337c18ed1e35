//! Temp root resolution.
//!
//! The root is resolved once and then treated as read-only. Resolution makes the
//! path absolute and resolves symlinks so that every generated path shares the
//! exact prefix returned by [`TempRoot::path`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::TempConfig;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TempRoot(PathBuf);

impl TempRoot {
    /// The host's temp directory (`TMPDIR`/`TEMP` aware via `std::env::temp_dir`).
    pub fn os() -> Self {
        let dir = std::env::temp_dir();
        let dir = if dir.is_absolute() {
            dir
        } else {
            // Never resolve the OS temp dir against the working directory.
            platform_fallback()
        };
        Self(canonical_or_raw(dir))
    }

    /// An explicit root. Relative paths are anchored at the current directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let dir = if dir.is_absolute() {
            dir
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(dir),
                Err(_) => dir,
            }
        };
        Self(canonical_or_raw(dir))
    }

    pub fn from_config(cfg: &TempConfig) -> Self {
        match &cfg.root {
            Some(dir) => Self::at(dir.clone()),
            None => Self::os(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.0.join(name)
    }

    /// True when `path` is strictly below this root.
    pub fn contains(&self, path: &Path) -> bool {
        path != self.0 && path.starts_with(&self.0)
    }
}

impl AsRef<Path> for TempRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TempRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// A root that does not exist yet keeps its lexical form.
fn canonical_or_raw(dir: PathBuf) -> PathBuf {
    std::fs::canonicalize(&dir).unwrap_or(dir)
}

fn platform_fallback() -> PathBuf {
    #[cfg(windows)]
    {
        std::env::var("TEMP")
            .or_else(|_| std::env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_root_is_absolute_and_exists() {
        let root = TempRoot::os();
        assert!(root.path().is_absolute());
        assert!(root.path().is_dir());
    }

    #[test]
    fn test_os_root_is_canonical() {
        let root = TempRoot::os();
        let canonical = std::fs::canonicalize(root.path()).unwrap();
        assert_eq!(root.path(), canonical.as_path());
    }

    #[test]
    fn test_contains() {
        let root = TempRoot::os();
        assert!(root.contains(&root.join("abc")));
        assert!(!root.contains(root.path()));
        assert!(!root.contains(Path::new("/definitely/not/under/temp")));
    }

    #[test]
    fn test_from_config_uses_override() {
        let dir = std::env::temp_dir().join("tmpscope-root-override");
        std::fs::create_dir_all(&dir).unwrap();
        let root = TempRoot::from_config(&TempConfig::with_root(&dir));
        assert_eq!(root.path(), std::fs::canonicalize(&dir).unwrap().as_path());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
