//! Error types for locator parsing and repository resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Convenient alias for locator results.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Errors raised while turning a locator string into [`crate::PathInformation`].
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The string could not be decomposed as a URI at all.
    #[error("malformed locator {locator:?}: {source}")]
    MalformedLocator {
        locator: String,
        #[source]
        source: url::ParseError,
    },

    /// Decomposition succeeded but the locator carries no path.
    #[error("locator {0:?} has no path component")]
    InvalidLocator(String),

    /// The locator uses a different scheme than the one being resolved.
    #[error("locator scheme {found:?} does not match {expected:?}")]
    SchemeMismatch { expected: String, found: String },

    /// Failure reported by the repository collaborator, passed through as-is.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors raised by a repository collaborator.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No repository root encloses the given path.
    #[error("no repository found for {path}")]
    RepositoryNotFound { path: PathBuf },

    /// The path does not lie under the repository root.
    #[error("{path} is outside of repository {root}")]
    PathOutsideRepository { path: PathBuf, root: PathBuf },

    /// Filesystem failure during discovery.
    #[error("I/O error while inspecting {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
