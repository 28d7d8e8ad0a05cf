//! Folder operations for the Box API
//!
//! Provides folder item listing (with offset pagination), child folder and
//! item lookup by name, and folder creation.
//!
//! ## Box API References
//!
//! - `GET /folders/{id}/items` - list items in a folder
//! - `POST /folders` - create a folder
//!
//! "Not found" is expressed structurally: a missing child is simply absent
//! from the listing, so lookups return `Ok(None)` and every non-success
//! HTTP status is a hard error. The one exception is folder creation,
//! where a `409 item_name_in_use` means the folder appeared between lookup
//! and creation; the existing folder is fetched instead so fetch-or-create
//! stays idempotent.

use anyhow::{Context, Result};
use boxup_core::domain::newtypes::{ContentHash, FolderId};
use boxup_core::ports::remote_storage::{ItemKind, RemoteItem};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::client::BoxClient;

/// Page size for folder item listings.
const LIST_PAGE_LIMIT: u64 = 1000;

// ============================================================================
// Box API response types
// ============================================================================

/// One entry from a folder listing or upload response.
#[derive(Debug, Deserialize)]
pub(crate) struct BoxItem {
    /// Item type: `"file"`, `"folder"`, or `"web_link"`
    #[serde(rename = "type")]
    pub item_type: String,
    /// Box item ID
    pub id: String,
    /// Item name
    pub name: String,
    /// SHA-1 content fingerprint (files only)
    pub sha1: Option<String>,
}

/// Response from `GET /folders/{id}/items`.
#[derive(Debug, Deserialize)]
struct FolderItemsResponse {
    /// Total number of items in the folder (across all pages)
    total_count: u64,
    /// Items in this page
    entries: Vec<BoxItem>,
}

/// Response from `POST /folders`.
#[derive(Debug, Deserialize)]
struct CreatedFolderResponse {
    /// Box folder ID
    id: String,
}

/// Error body returned by Box on conflicting folder creation.
#[derive(Debug, Deserialize)]
struct ConflictResponse {
    /// Machine-readable error code (e.g. `"item_name_in_use"`)
    code: Option<String>,
}

/// Maps a raw Box entry onto the port-level [`RemoteItem`] DTO.
///
/// Anything that is not a plain file (folders, web links) maps to
/// [`ItemKind::Folder`]: no upload decision may target such a name.
pub(crate) fn to_remote_item(item: BoxItem) -> RemoteItem {
    let kind = if item.item_type == "file" {
        ItemKind::File
    } else {
        ItemKind::Folder
    };
    let sha1 = item.sha1.and_then(|h| ContentHash::new(h).ok());
    RemoteItem {
        id: item.id,
        kind,
        name: item.name,
        sha1,
    }
}

// ============================================================================
// Listing and lookup
// ============================================================================

/// Lists every item in a folder, following offset pagination.
async fn list_folder_items(client: &BoxClient, folder: &FolderId) -> Result<Vec<BoxItem>> {
    let mut items = Vec::new();
    let mut offset: u64 = 0;

    loop {
        let path = format!(
            "/folders/{}/items?fields=id,type,name,sha1&limit={}&offset={}",
            folder.as_str(),
            LIST_PAGE_LIMIT,
            offset
        );
        debug!(folder = %folder, offset, "listing folder items");

        let page: FolderItemsResponse = client
            .request(Method::GET, &path)
            .send()
            .await
            .with_context(|| format!("Failed to list folder {}", folder))?
            .error_for_status()
            .with_context(|| format!("Folder listing returned error status for {}", folder))?
            .json()
            .await
            .context("Failed to parse folder listing response")?;

        let total = page.total_count;
        offset += page.entries.len() as u64;
        let page_len = page.entries.len();
        items.extend(page.entries);

        if offset >= total || page_len == 0 {
            break;
        }
    }

    Ok(items)
}

/// Looks up a direct child folder by name.
pub async fn find_child_folder(
    client: &BoxClient,
    parent: &FolderId,
    name: &str,
) -> Result<Option<FolderId>> {
    let items = list_folder_items(client, parent).await?;
    for item in items {
        if item.item_type == "folder" && item.name == name {
            let id = FolderId::new(item.id).context("Box returned an empty folder ID")?;
            return Ok(Some(id));
        }
    }
    Ok(None)
}

/// Looks up an item of any kind by name within a folder.
pub async fn find_item(
    client: &BoxClient,
    folder: &FolderId,
    name: &str,
) -> Result<Option<RemoteItem>> {
    let items = list_folder_items(client, folder).await?;
    Ok(items
        .into_iter()
        .find(|item| item.name == name)
        .map(to_remote_item))
}

// ============================================================================
// Creation
// ============================================================================

/// Creates a folder under `parent`, tolerating concurrent creation.
///
/// On `409 item_name_in_use` the folder already exists remotely; it is
/// fetched and returned so the operation is idempotent in effect.
pub async fn create_folder(client: &BoxClient, parent: &FolderId, name: &str) -> Result<FolderId> {
    debug!(parent = %parent, name, "creating remote folder");

    let body = serde_json::json!({
        "name": name,
        "parent": { "id": parent.as_str() },
    });

    let response = client
        .request(Method::POST, "/folders")
        .json(&body)
        .send()
        .await
        .with_context(|| format!("Failed to create folder '{}' under {}", name, parent))?;

    if response.status() == StatusCode::CONFLICT {
        let conflict: ConflictResponse = response
            .json()
            .await
            .context("Failed to parse folder conflict response")?;
        if conflict.code.as_deref() == Some("item_name_in_use") {
            debug!(parent = %parent, name, "folder already exists, fetching it");
            return find_child_folder(client, parent, name)
                .await?
                .with_context(|| {
                    format!(
                        "Folder '{}' reported as existing under {} but not found",
                        name, parent
                    )
                });
        }
        anyhow::bail!(
            "Folder creation conflict for '{}' under {}: {:?}",
            name,
            parent,
            conflict.code
        );
    }

    let created: CreatedFolderResponse = response
        .error_for_status()
        .with_context(|| format!("Folder creation returned error status for '{}'", name))?
        .json()
        .await
        .context("Failed to parse folder creation response")?;

    FolderId::new(created.id).context("Box returned an empty folder ID")
}
