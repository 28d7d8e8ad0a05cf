//! BoxRemoteStorage - IRemoteStorage implementation for the Box API
//!
//! Wraps the [`BoxClient`] and delegates to the [`folders`](crate::folders)
//! and [`upload`](crate::upload) modules to fulfil the
//! [`IRemoteStorage`] port contract.
//!
//! ## Design Notes
//!
//! - Every method maps straight onto one adapter function; error context
//!   and "not found" classification live there.
//! - No retry loop here: the core's non-goals place retry policy outside
//!   the pipeline, and callers treat any `Err` as fatal.

use std::path::Path;

use anyhow::Result;
use boxup_core::domain::newtypes::{FileId, FolderId};
use boxup_core::ports::remote_storage::{IRemoteStorage, RemoteItem, UploadAttrs};

use crate::client::BoxClient;
use crate::{folders, upload};

/// Remote storage implementation that delegates to the Box API.
pub struct BoxRemoteStorage {
    /// The underlying Box API client
    client: BoxClient,
}

impl BoxRemoteStorage {
    /// Creates a new `BoxRemoteStorage` wrapping the given [`BoxClient`].
    pub fn new(client: BoxClient) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &BoxClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl IRemoteStorage for BoxRemoteStorage {
    async fn find_child_folder(
        &self,
        parent: &FolderId,
        name: &str,
    ) -> Result<Option<FolderId>> {
        folders::find_child_folder(&self.client, parent, name).await
    }

    async fn create_folder(&self, parent: &FolderId, name: &str) -> Result<FolderId> {
        folders::create_folder(&self.client, parent, name).await
    }

    async fn find_item(&self, folder: &FolderId, name: &str) -> Result<Option<RemoteItem>> {
        folders::find_item(&self.client, folder, name).await
    }

    async fn upload_file(
        &self,
        folder: &FolderId,
        attrs: &UploadAttrs,
        content: &Path,
    ) -> Result<RemoteItem> {
        upload::upload_new(&self.client, folder, attrs, content).await
    }

    async fn replace_file(
        &self,
        file: &FileId,
        attrs: &UploadAttrs,
        content: &Path,
    ) -> Result<RemoteItem> {
        upload::upload_version(&self.client, file, attrs, content).await
    }
}
