//! Error types for repotrack-core.

use miette::Diagnostic;
use repotrack_db::DbError;
use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for repotrack operations.
#[derive(Error, Diagnostic, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Thread lock poison error")]
    #[diagnostic(
        code(repotrack::poison),
        help("This is an internal error, please report it")
    )]
    PoisonError,

    #[error("{0}")]
    #[diagnostic(code(repotrack::error))]
    Custom(String),
}

impl<T> From<std::sync::PoisonError<T>> for TrackerError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::PoisonError
    }
}

/// Result type alias for repotrack-core operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
