//! TempSpace: unique path generation over an owned directory registry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tmpscope_core::options::FileTarget;
use tmpscope_core::prelude::*;
use tmpscope_registry::{CleanReport, DirectoryRegistry};

/// Redraws allowed when a generated directory name already exists.
pub const MAX_CREATE_ATTEMPTS: usize = 8;

/// A temp root, a name generator and the registry of directories created under it.
///
/// The root is resolved once at construction and never changes. Directories are
/// tracked until [`clean`](Self::clean) drains them; dropping a `TempSpace` does
/// not delete anything.
#[derive(Debug)]
pub struct TempSpace {
    root: TempRoot,
    names: NameGenerator,
    registry: DirectoryRegistry,
}

impl TempSpace {
    pub fn new(cfg: TempConfig) -> Result<Self> {
        Self::with_registry(cfg, DirectoryRegistry::new())
    }

    pub fn with_registry(cfg: TempConfig, registry: DirectoryRegistry) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::build(&cfg, registry))
    }

    /// Environment-driven space backing the process-wide default.
    ///
    /// `TempConfig::from_env` only yields valid configs, so this cannot fail.
    pub fn from_env() -> Self {
        Self::build(&TempConfig::from_env(), DirectoryRegistry::new())
    }

    fn build(cfg: &TempConfig, registry: DirectoryRegistry) -> Self {
        let root = TempRoot::from_config(cfg);
        #[cfg(feature = "tracing")]
        tracing::debug!(root = %root, name_len = cfg.name_len, "temp space initialised");
        Self {
            root,
            names: NameGenerator::from_config(cfg),
            registry,
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn temp_root(&self) -> &TempRoot {
        &self.root
    }

    pub fn registry(&self) -> &DirectoryRegistry {
        &self.registry
    }

    pub fn unique_name(&self) -> UniqueName {
        self.names.next_name()
    }

    /// A path under the root you can write to.
    ///
    /// Only a `name` option touches the filesystem: it creates (and tracks) a
    /// fresh unique directory and returns `that_dir/name`. Intermediate
    /// directories inside `name` are not created.
    pub fn file(&self, opts: &PathOptions) -> Result<PathBuf> {
        match opts.target()? {
            FileTarget::Bare => Ok(self.root.join(self.unique_name())),
            FileTarget::Extension(ext) => {
                Ok(self.root.join(format!("{}.{ext}", self.unique_name())))
            }
            FileTarget::Named(name) => Ok(self.directory()?.join(name)),
        }
    }

    /// Create a fresh directory under the root and track it.
    pub fn directory(&self) -> Result<PathBuf> {
        for _ in 0..MAX_CREATE_ATTEMPTS {
            let path = self.root.join(self.unique_name());
            match fs::create_dir(&path) {
                Ok(()) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(path = %path.display(), "created temp directory");
                    self.registry.track(path.clone());
                    return Ok(path);
                }
                // Never adopt a directory somebody else created.
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(Error::io(path, e)),
            }
        }
        Err(Error::Exhausted {
            attempts: MAX_CREATE_ATTEMPTS,
        })
    }

    /// Delete every tracked directory; returns the attempted paths in creation order.
    pub fn clean(&self) -> Vec<PathBuf> {
        self.registry.clean()
    }

    pub fn clean_report(&self) -> CleanReport {
        self.registry.clean_report()
    }
}
