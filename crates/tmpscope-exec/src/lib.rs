#![forbid(unsafe_code)]
//! tmpscope-exec: the path generator (`TempSpace`) and scoped temp-directory jobs.
//!
//! `TempSpace` owns a resolved temp root, a name generator and a
//! `DirectoryRegistry`. `job` (and `job_async` behind the `async` feature) run a
//! task against a fresh tracked directory and remove it on every exit path.

pub mod job;
pub mod space;

pub use job::JobDirGuard;
pub use space::{TempSpace, MAX_CREATE_ATTEMPTS};
