//! Remote storage port (driven/secondary port)
//!
//! Defines the interface for the remote hierarchical file-storage service.
//! The primary implementation targets the Box API, but the trait is
//! provider-agnostic: any service offering folder lookup/creation, item
//! lookup by name, and content upload/replacement can satisfy it.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific; any `Err` from these methods is fatal to the run.
//!   "Not found" is not an error - lookups return `Ok(None)`.
//! - Uses `#[async_trait]` for async trait methods.
//! - [`RemoteItem`] is a port-level DTO, not a domain entity; the sync
//!   engine maps it onto decisions.
//! - Upload methods receive the *local path* of the content and open their
//!   own fresh byte stream. The stream consumed while fingerprinting is
//!   never reused; content is read twice by design so arbitrarily large
//!   files are never buffered in memory.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::newtypes::{ContentHash, FileId, FolderId};

// ============================================================================
// Port-level DTOs
// ============================================================================

/// Kind of a remote item as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A regular file with content and a fingerprint.
    File,
    /// A folder; uploads may never target a name held by one.
    Folder,
}

/// Whatever the remote side reports under a given name, at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteItem {
    /// Provider-specific item identifier.
    pub id: String,
    /// Item kind; anything the provider reports that is not a plain file
    /// maps to [`ItemKind::Folder`] for collision purposes.
    pub kind: ItemKind,
    /// Item display name.
    pub name: String,
    /// Content fingerprint the service reports for files (absent for
    /// folders).
    pub sha1: Option<ContentHash>,
}

/// Metadata attached to an upload or content replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAttrs {
    /// Display name of the file.
    pub name: String,
    /// Fingerprint of the content being transmitted, sent as the service's
    /// integrity attribute.
    pub sha1: ContentHash,
    /// Local creation timestamp, when known.
    pub content_created_at: Option<DateTime<Utc>>,
    /// Local modification timestamp, when known.
    pub content_modified_at: Option<DateTime<Utc>>,
}

// ============================================================================
// IRemoteStorage trait
// ============================================================================

/// Port trait for remote file-storage operations.
///
/// ## Implementation Notes
///
/// - Implementations must distinguish "not found" (`Ok(None)`) from every
///   other failure; the core treats any `Err` as fatal and aborts the run.
/// - No retry policy belongs here or in the core; if an adapter wants
///   retries it implements them behind this interface.
#[async_trait::async_trait]
pub trait IRemoteStorage: Send + Sync {
    /// Looks up a direct child folder by name.
    ///
    /// # Returns
    /// The child folder's ID, or `None` if no folder of that name exists
    /// under `parent`.
    async fn find_child_folder(
        &self,
        parent: &FolderId,
        name: &str,
    ) -> anyhow::Result<Option<FolderId>>;

    /// Creates a folder under `parent`.
    ///
    /// Must be idempotent in effect: if the folder already exists (e.g. it
    /// appeared between lookup and creation), implementations return the
    /// existing folder rather than failing.
    async fn create_folder(&self, parent: &FolderId, name: &str) -> anyhow::Result<FolderId>;

    /// Looks up an item (of any kind) by name within a folder.
    async fn find_item(&self, folder: &FolderId, name: &str)
        -> anyhow::Result<Option<RemoteItem>>;

    /// Uploads a new file into `folder`, streaming content from `content`.
    ///
    /// Attaches the fingerprint and normalized timestamps from `attrs`.
    async fn upload_file(
        &self,
        folder: &FolderId,
        attrs: &UploadAttrs,
        content: &Path,
    ) -> anyhow::Result<RemoteItem>;

    /// Replaces the content of an existing remote file.
    async fn replace_file(
        &self,
        file: &FileId,
        attrs: &UploadAttrs,
        content: &Path,
    ) -> anyhow::Result<RemoteItem>;
}
