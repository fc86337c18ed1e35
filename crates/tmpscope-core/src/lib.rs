#![forbid(unsafe_code)]
//! tmpscope-core: temp-root resolution, unique names, path options, config and errors.
//!
//! This crate does not track or delete anything. Registry/cleanup live in
//! `tmpscope-registry`; the path generator and scoped jobs live in `tmpscope-exec`.

pub mod config;
pub mod error;
pub mod name;
pub mod options;
pub mod prelude;
pub mod root;

pub use config::TempConfig;
pub use error::{Error, Result};
pub use name::{NameGenerator, UniqueName};
pub use options::{FileTarget, PathOptions};
pub use root::TempRoot;
