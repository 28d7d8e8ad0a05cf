//! Domain error types
//!
//! Two distinct families live here:
//! - [`DomainError`] - validation failures raised when constructing domain
//!   values (invalid paths, hashes, identifiers).
//! - [`FileError`] - recoverable per-file sync outcomes. These are recorded
//!   against the entry's tally slot and never abort the run, unlike fatal
//!   service or traversal errors which propagate as `anyhow::Error`.

use thiserror::Error;

/// Errors that can occur when validating domain values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid remote path format
    #[error("Invalid remote path: {0}")]
    InvalidRemotePath(String),

    /// Invalid content hash format (expected 40 lowercase hex characters)
    #[error("Invalid content hash: {0}")]
    InvalidHash(String),

    /// Invalid remote identifier
    #[error("Invalid remote ID: {0}")]
    InvalidId(String),
}

/// Recoverable per-file sync errors
///
/// Each variant maps to one `err:` output line and one `errored` tally
/// increment; the walk continues past them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileError {
    /// A remote entry with the same name exists but is a folder
    #[error("name collision with directory")]
    DirectoryCollision,

    /// Remote content differs and `--overwrite` was not given
    #[error("remote content differs, overwrite not enabled")]
    OverwriteNotEnabled,

    /// The local file could not be read while fingerprinting
    #[error("could not read local content: {0}")]
    Unreadable(String),
}
