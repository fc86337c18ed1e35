//! Convenient re-exports for downstream crates.

pub use crate::config::TempConfig;
pub use crate::error::{Error, Result};
pub use crate::name::{NameGenerator, UniqueName};
pub use crate::options::{FileTarget, PathOptions};
pub use crate::root::TempRoot;
