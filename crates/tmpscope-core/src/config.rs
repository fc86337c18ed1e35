//! Temp-space configuration that downstream crates can serialize/deserialize.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shortest unique name accepted, in hex characters.
pub const MIN_NAME_LEN: usize = 8;
/// Longest unique name accepted; a full BLAKE3 digest in hex.
pub const MAX_NAME_LEN: usize = 64;
/// 16 bytes of entropy rendered as hex.
pub const DEFAULT_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempConfig {
    /// Explicit temp root. `None` means the OS temp directory.
    pub root: Option<PathBuf>,

    /// Length of generated basenames in hex characters.
    pub name_len: usize,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self {
            root: None,
            name_len: DEFAULT_NAME_LEN,
        }
    }
}

impl TempConfig {
    /// Config rooted at an explicit directory, everything else default.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `TMPSCOPE_ROOT`: temp root override
    /// - `TMPSCOPE_NAME_LEN`: unique name length in hex characters
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("TMPSCOPE_ROOT") {
            if !s.trim().is_empty() {
                cfg.root = Some(PathBuf::from(s));
            }
        }

        if let Ok(s) = std::env::var("TMPSCOPE_NAME_LEN") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.name_len = v.clamp(MIN_NAME_LEN, MAX_NAME_LEN);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&self.name_len) {
            return Err(Error::Config(format!(
                "name_len must be within {MIN_NAME_LEN}..={MAX_NAME_LEN}, got {}",
                self.name_len
            )));
        }
        if let Some(root) = &self.root {
            if root.as_os_str().is_empty() {
                return Err(Error::Config("root must not be empty".into()));
            }
        }
        Ok(())
    }
}
