//! Random basenames for temp files and directories.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use blake3::Hasher;
use uuid::Uuid;

use crate::config::{TempConfig, DEFAULT_NAME_LEN, MAX_NAME_LEN, MIN_NAME_LEN};

/// A lowercase hex token used as a basename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueName(String);

impl UniqueName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for UniqueName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for UniqueName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl fmt::Display for UniqueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces [`UniqueName`]s of a fixed length.
///
/// Each name is a BLAKE3 digest over fresh UUIDv4 randomness, the process id and
/// a per-generator sequence number, so two names from one generator never share
/// their digest input even if the RNG were to repeat.
#[derive(Debug)]
pub struct NameGenerator {
    len: usize,
    seq: AtomicU64,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_LEN)
    }
}

impl NameGenerator {
    /// `len` is clamped into the accepted range.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.clamp(MIN_NAME_LEN, MAX_NAME_LEN),
            seq: AtomicU64::new(0),
        }
    }

    pub fn from_config(cfg: &TempConfig) -> Self {
        Self::new(cfg.name_len)
    }

    pub fn name_len(&self) -> usize {
        self.len
    }

    pub fn next_name(&self) -> UniqueName {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let mut h = Hasher::new();
        h.update(Uuid::new_v4().as_bytes());
        h.update(&std::process::id().to_le_bytes());
        h.update(&seq.to_le_bytes());
        let mut hex = h.finalize().to_hex().to_string();
        hex.truncate(self.len);
        UniqueName(hex)
    }
}
