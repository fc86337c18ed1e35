//! Scoped jobs: hand a task a fresh temp directory and delete it afterwards.
//!
//! The directory is removed on every exit path: normal return, `Err`, panic
//! (via [`JobDirGuard`] on unwind) and, for the async variant, the future being
//! dropped before completion. The task's own result is returned untouched.

use std::path::{Path, PathBuf};

use tmpscope_core::error::Error;

use crate::space::TempSpace;

/// RAII guard that removes a job directory when dropped.
/// Call [`disarm`](Self::disarm) to take over removal.
pub struct JobDirGuard {
    path: Option<PathBuf>,
}

impl JobDirGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn disarm(&mut self) -> Option<PathBuf> {
        self.path.take()
    }
}

impl Drop for JobDirGuard {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            // Best-effort; Drop must never panic.
            match std::fs::remove_dir_all(&path) {
                Ok(()) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(path = %path.display(), "job directory removed");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log_remove_failure(&path, &e),
            }
        }
    }
}

#[allow(unused_variables)]
fn log_remove_failure(path: &Path, err: &std::io::Error) {
    #[cfg(feature = "tracing")]
    tracing::warn!(path = %path.display(), error = %err, "failed to remove job directory");
}

impl TempSpace {
    /// Run `task` with a fresh tracked directory, then delete it.
    ///
    /// Directory creation errors are converted into the task's error type.
    pub fn job<T, E, F>(&self, task: F) -> Result<T, E>
    where
        F: FnOnce(&Path) -> Result<T, E>,
        E: From<Error>,
    {
        let dir = self.directory()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %dir.display(), "job started");

        let guard = JobDirGuard::new(dir.clone());
        let out = task(&dir);
        drop(guard);

        #[cfg(feature = "tracing")]
        tracing::debug!(ok = out.is_ok(), "job finished");
        out
    }

    /// Async [`job`](Self::job): the task receives an owned path and may await.
    #[cfg(feature = "async")]
    pub async fn job_async<T, E, F, Fut>(&self, task: F) -> Result<T, E>
    where
        F: FnOnce(PathBuf) -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: From<Error>,
    {
        let dir = self.directory()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %dir.display(), "async job started");

        let mut guard = JobDirGuard::new(dir.clone());
        let out = task(dir).await;

        if let Some(path) = guard.disarm() {
            match tokio::fs::remove_dir_all(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log_remove_failure(&path, &e),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(ok = out.is_ok(), "async job finished");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmpscope_core::prelude::*;

    fn space(name: &str) -> (TempSpace, PathBuf) {
        let base = std::env::temp_dir().join(format!("tmpscope-job-tests-{name}"));
        let _ = std::fs::remove_dir_all(&base);
        std::fs::create_dir_all(&base).unwrap();
        let space = TempSpace::new(TempConfig::with_root(&base)).unwrap();
        (space, base)
    }

    #[derive(Debug)]
    enum TaskError {
        Temp(Error),
        Failed(&'static str),
    }

    impl From<Error> for TaskError {
        fn from(e: Error) -> Self {
            TaskError::Temp(e)
        }
    }

    #[test]
    fn test_job_ok_removes_directory() {
        let (space, base) = space("ok");
        let seen = space
            .job(|dir| -> std::result::Result<PathBuf, Error> {
                assert!(dir.is_dir());
                std::fs::write(dir.join("out.txt"), b"x").unwrap();
                Ok(dir.to_path_buf())
            })
            .unwrap();
        assert!(!seen.exists());
        // Still tracked; a later sweep sees it as already gone.
        let report = space.clean_report();
        assert_eq!(report.missing, vec![seen]);
        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn test_job_err_propagates_after_cleanup() {
        let (space, base) = space("err");
        let mut seen = None;
        let err = space
            .job(|dir| -> std::result::Result<(), TaskError> {
                seen = Some(dir.to_path_buf());
                Err(TaskError::Failed("boom"))
            })
            .unwrap_err();
        assert!(matches!(err, TaskError::Failed("boom")));
        assert!(!seen.unwrap().exists());
        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn test_job_panic_still_cleans() {
        let (space, base) = space("panic");
        let seen = std::sync::Mutex::new(None);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: std::result::Result<(), Error> = space.job(|dir| {
                *seen.lock().unwrap() = Some(dir.to_path_buf());
                panic!("task panicked");
            });
        }));
        assert!(result.is_err());
        let seen = seen.lock().unwrap().clone().unwrap();
        assert!(!seen.exists());
        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn test_job_creation_failure_converts() {
        let base = std::env::temp_dir().join("tmpscope-job-tests-no-root");
        let _ = std::fs::remove_dir_all(&base);
        let space = TempSpace::new(TempConfig::with_root(&base)).unwrap();
        let mut ran = false;
        let err = space
            .job(|_| -> std::result::Result<(), TaskError> {
                ran = true;
                Ok(())
            })
            .unwrap_err();
        assert!(!ran);
        assert!(matches!(err, TaskError::Temp(Error::Io { .. })));
    }

    #[test]
    fn test_guard_disarm_keeps_directory() {
        let (_space, base) = space("disarm");
        let dir = base.join("kept");
        std::fs::create_dir_all(&dir).unwrap();
        let mut guard = JobDirGuard::new(dir.clone());
        assert_eq!(guard.disarm(), Some(dir.clone()));
        drop(guard);
        assert!(dir.exists());
        let _ = std::fs::remove_dir_all(base);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_job_async_removes_directory() {
        let (space, base) = space("async");
        let seen = space
            .job_async(|dir| async move {
                assert!(tokio::fs::metadata(&dir).await.unwrap().is_dir());
                Ok::<_, Error>(dir)
            })
            .await
            .unwrap();
        assert!(!seen.exists());
        let _ = std::fs::remove_dir_all(base);
    }
}
