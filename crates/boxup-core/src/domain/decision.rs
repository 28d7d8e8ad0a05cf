//! Per-entry sync decisions
//!
//! The decision engine classifies every [`LocalEntry`](super::LocalEntry)
//! into exactly one [`SyncDecision`]. Decisions are computed fresh per entry
//! and never persisted.

use super::errors::FileError;
use super::newtypes::{ContentHash, FileId};

/// Terminal classification of one local file against the remote state.
///
/// Fingerprint comparison is the sole "changed" signal; timestamps are only
/// attached as metadata on writes, never consulted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncDecision {
    /// No remote item of this name exists; upload a new file.
    Create {
        /// Local content fingerprint, attached as the integrity attribute.
        digest: ContentHash,
    },
    /// A remote file exists with a different fingerprint and overwrite is
    /// enabled; replace its content.
    Update {
        /// Identifier of the remote file whose content is replaced.
        existing: FileId,
        /// Local content fingerprint.
        digest: ContentHash,
    },
    /// A remote file exists with an identical fingerprint; nothing to do.
    Skip,
    /// A recoverable per-file error; recorded, then the walk continues.
    Error(FileError),
}

impl SyncDecision {
    /// Whether executing this decision performs a network write.
    #[must_use]
    pub fn writes_content(&self) -> bool {
        matches!(self, Self::Create { .. } | Self::Update { .. })
    }
}
