use std::path::PathBuf;

use thiserror::Error;

/// Canonical result for tmpscope.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid path options: {0}")]
    InvalidOptions(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find an unused temporary name after {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
