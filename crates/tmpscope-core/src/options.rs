//! Options accepted by the file-path generator.
//!
//! `extension` and `name` are mutually exclusive. Validation happens up front in
//! [`PathOptions::target`] so a rejected call never touches the filesystem.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    /// File extension, with or without a leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Exact filename placed inside a fresh unique directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// What a validated [`PathOptions`] asks the generator to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    /// `root/<unique>`
    Bare,
    /// `root/<unique>.<ext>`; the extension carries no leading dot.
    Extension(String),
    /// `root/<unique dir>/<name>`
    Named(PathBuf),
}

impl PathOptions {
    pub fn extension(ext: impl Into<String>) -> Self {
        Self {
            extension: Some(ext.into()),
            name: None,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            extension: None,
            name: Some(name.into()),
        }
    }

    pub fn target(&self) -> Result<FileTarget> {
        match (&self.extension, &self.name) {
            (Some(_), Some(_)) => Err(Error::InvalidOptions(
                "`name` and `extension` are mutually exclusive".into(),
            )),
            (Some(ext), None) => Ok(match normalize_extension(ext) {
                Some(ext) => FileTarget::Extension(ext.to_string()),
                None => FileTarget::Bare,
            }),
            (None, Some(name)) => validate_name(name).map(FileTarget::Named),
            (None, None) => Ok(FileTarget::Bare),
        }
    }
}

/// Strip at most one leading dot; an empty result means "no extension".
pub fn normalize_extension(ext: &str) -> Option<&str> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

// The name must stay inside the unique directory it is joined onto.
fn validate_name(name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(Error::InvalidOptions("`name` must not be empty".into()));
    }
    let path = Path::new(name);
    let mut normal = 0usize;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(Error::InvalidOptions(format!(
                    "`name` must not contain '..': {name}"
                )))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::InvalidOptions(format!(
                    "`name` must be a relative path: {name}"
                )))
            }
        }
    }
    if normal == 0 {
        return Err(Error::InvalidOptions(format!(
            "`name` does not name a file: {name}"
        )));
    }
    Ok(path.to_path_buf())
}
