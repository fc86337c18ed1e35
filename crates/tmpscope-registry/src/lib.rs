#![forbid(unsafe_code)]
//! tmpscope-registry: the created-directory set and its best-effort cleaner.
//!
//! Every directory handed out by the path generator is recorded here. Cleaning
//! drains the set and recursively deletes each entry; individual failures are
//! reported in a [`CleanReport`] but never fail the whole sweep.
//!
//! Deletion goes through the [`DirRemover`] trait so callers (and tests) can
//! swap the filesystem for something else.

pub mod registry;
pub mod remover;

pub use registry::{CleanReport, DirectoryRegistry};
pub use remover::{DirRemover, FsRemover, Removal};
