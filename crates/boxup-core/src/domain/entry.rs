//! Local file entries produced by the tree walker
//!
//! A [`LocalEntry`] pairs one regular file discovered during traversal with
//! the filesystem metadata the upload attaches. Entries are immutable and
//! live for exactly one pass through the per-file pipeline.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::errors::DomainError;
use super::newtypes::RemotePath;

/// One local file discovered by the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    /// Absolute path of the file on disk.
    pub path: PathBuf,
    /// Directory containing the file, relative to the walk base.
    /// Empty for files directly under the base.
    pub relative_dir: PathBuf,
    /// File name without any directory components.
    pub file_name: String,
    /// Creation timestamp, when the filesystem reports one.
    pub created: Option<DateTime<Utc>>,
    /// Last-modification timestamp, when the filesystem reports one.
    pub modified: Option<DateTime<Utc>>,
}

impl LocalEntry {
    /// Remote folder this entry maps into, under the given destination.
    ///
    /// A file at `<base>/a/b/c.txt` mirrored into destination `dest`
    /// resolves to remote folder `dest/a/b`.
    pub fn remote_dir(&self, destination: &RemotePath) -> Result<RemotePath, DomainError> {
        let relative = RemotePath::from_local(&self.relative_dir)?;
        Ok(destination.join_path(&relative))
    }

    /// Full remote path of the file itself, used in progress and error lines.
    pub fn remote_path(&self, destination: &RemotePath) -> Result<RemotePath, DomainError> {
        self.remote_dir(destination)?.join(&self.file_name)
    }
}

/// Convert a filesystem timestamp into `DateTime<Utc>`.
///
/// Returns `None` for timestamps the platform cannot represent (e.g. a
/// filesystem without creation-time support).
#[must_use]
pub fn system_time_to_utc(time: std::time::SystemTime) -> Option<DateTime<Utc>> {
    time.duration_since(std::time::UNIX_EPOCH)
        .ok()
        .and_then(|dur| DateTime::from_timestamp(dur.as_secs() as i64, dur.subsec_nanos()))
}
