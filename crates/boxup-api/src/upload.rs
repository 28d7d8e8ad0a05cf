//! Upload operations for the Box API
//!
//! Provides the two content-writing operations the sync core needs:
//! - [`upload_new`] - `POST /files/content`, creating a file in a folder
//! - [`upload_version`] - `POST /files/{id}/content`, replacing content
//!
//! Both send a multipart request with an `attributes` JSON part (name,
//! parent, normalized timestamps) and a `file` part streamed straight from
//! disk, so arbitrarily large files are never buffered in memory. The
//! SHA-1 fingerprint travels in the `content-md5` request header, which is
//! Box's integrity attribute for uploads.
//!
//! ## Box API References
//!
//! - [Upload a file](https://developer.box.com/reference/post-files-content/)
//! - [Upload a file version](https://developer.box.com/reference/post-files-id-content/)

use std::path::Path;

use anyhow::{Context, Result};
use boxup_core::domain::newtypes::{FileId, FolderId};
use boxup_core::ports::remote_storage::{RemoteItem, UploadAttrs};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use serde::Deserialize;
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::client::BoxClient;
use crate::folders::{to_remote_item, BoxItem};
use crate::timestamp::format_box_timestamp;

/// Response from both upload endpoints: a one-element collection.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    entries: Vec<BoxItem>,
}

/// Builds the `attributes` JSON part.
///
/// `parent` is present only for new uploads; version uploads address the
/// file by ID in the URL. Timestamps are rendered second-precision per
/// [`format_box_timestamp`] and omitted when the filesystem did not report
/// them.
fn attributes_json(attrs: &UploadAttrs, parent: Option<&FolderId>) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("name".to_string(), attrs.name.clone().into());
    if let Some(parent) = parent {
        map.insert(
            "parent".to_string(),
            serde_json::json!({ "id": parent.as_str() }),
        );
    }
    if let Some(created) = attrs.content_created_at {
        map.insert(
            "content_created_at".to_string(),
            format_box_timestamp(created).into(),
        );
    }
    if let Some(modified) = attrs.content_modified_at {
        map.insert(
            "content_modified_at".to_string(),
            format_box_timestamp(modified).into(),
        );
    }
    serde_json::Value::Object(map)
}

/// Opens a fresh read stream over the local file as a multipart part.
///
/// This is always a second read of the content: the stream consumed while
/// fingerprinting is never reused.
async fn file_part(content: &Path, name: &str) -> Result<Part> {
    let file = tokio::fs::File::open(content)
        .await
        .with_context(|| format!("Failed to open {} for upload", content.display()))?;
    let len = file
        .metadata()
        .await
        .with_context(|| format!("Failed to stat {} for upload", content.display()))?
        .len();
    let body = Body::wrap_stream(ReaderStream::new(file));
    Ok(Part::stream_with_length(body, len).file_name(name.to_string()))
}

/// Sends a multipart upload request and parses the created item.
async fn send_upload(
    request: reqwest::RequestBuilder,
    attrs: &UploadAttrs,
    parent: Option<&FolderId>,
    content: &Path,
) -> Result<RemoteItem> {
    let form = Form::new()
        .text(
            "attributes",
            serde_json::to_string(&attributes_json(attrs, parent))
                .context("Failed to serialize upload attributes")?,
        )
        .part("file", file_part(content, &attrs.name).await?);

    let response: UploadResponse = request
        .header("content-md5", attrs.sha1.as_str())
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Failed to upload '{}'", attrs.name))?
        .error_for_status()
        .with_context(|| format!("Upload of '{}' returned error status", attrs.name))?
        .json()
        .await
        .context("Failed to parse upload response")?;

    let item = response
        .entries
        .into_iter()
        .next()
        .with_context(|| format!("Upload response for '{}' contained no entries", attrs.name))?;

    Ok(to_remote_item(item))
}

/// Uploads a new file into `folder`, streaming content from `content`.
pub async fn upload_new(
    client: &BoxClient,
    folder: &FolderId,
    attrs: &UploadAttrs,
    content: &Path,
) -> Result<RemoteItem> {
    debug!(folder = %folder, name = attrs.name, "uploading new file");
    send_upload(
        client.upload_request(Method::POST, "/files/content"),
        attrs,
        Some(folder),
        content,
    )
    .await
}

/// Replaces the content of an existing remote file.
pub async fn upload_version(
    client: &BoxClient,
    file: &FileId,
    attrs: &UploadAttrs,
    content: &Path,
) -> Result<RemoteItem> {
    debug!(file = %file, name = attrs.name, "uploading new file version");
    let path = format!("/files/{}/content", file.as_str());
    send_upload(
        client.upload_request(Method::POST, &path),
        attrs,
        None,
        content,
    )
    .await
}
