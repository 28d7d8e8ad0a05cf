//! Integration tests for upload and content replacement

use boxup_core::domain::newtypes::{ContentHash, FileId, FolderId};
use boxup_core::ports::remote_storage::{ItemKind, UploadAttrs};
use chrono::TimeZone;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxup_api::client::BoxClient;
use boxup_api::upload;

use crate::common;

const CONTENT_SHA1: &str = "85136c79cbf9fe36bb9d05d0639c70c265c18d37";

fn attrs(name: &str) -> UploadAttrs {
    UploadAttrs {
        name: name.to_string(),
        sha1: ContentHash::new(CONTENT_SHA1).unwrap(),
        content_created_at: Some(chrono::Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()),
        content_modified_at: Some(chrono::Utc.with_ymd_and_hms(2024, 5, 18, 10, 0, 5).unwrap()),
    }
}

/// Writes a throwaway local file and returns its directory handle and path.
fn local_file(content: &[u8]) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("payload.bin");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[tokio::test]
async fn test_upload_new_returns_created_item() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_upload_new(&server, "9001", "x.txt", CONTENT_SHA1).await;
    let (_dir, content) = local_file(b"hello box");

    let item = upload::upload_new(
        &client,
        &FolderId::new("42").unwrap(),
        &attrs("x.txt"),
        &content,
    )
    .await
    .expect("upload failed");

    assert_eq!(item.id, "9001");
    assert_eq!(item.kind, ItemKind::File);
    assert_eq!(item.sha1.unwrap().as_str(), CONTENT_SHA1);
}

#[tokio::test]
async fn test_upload_sends_fingerprint_header() {
    let (server, client) = common::setup_box_mock().await;
    let (_dir, content) = local_file(b"fingerprinted");

    Mock::given(method("POST"))
        .and(path("/files/content"))
        .and(header("content-md5", CONTENT_SHA1))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "total_count": 1,
            "entries": [{"type": "file", "id": "1", "name": "x.txt", "sha1": CONTENT_SHA1}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    upload::upload_new(&client, &FolderId::root(), &attrs("x.txt"), &content)
        .await
        .expect("upload with integrity header failed");
}

#[tokio::test]
async fn test_upload_version_targets_existing_file() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_upload_version(&server, "9001", "x.txt", CONTENT_SHA1).await;
    let (_dir, content) = local_file(b"new content");

    let item = upload::upload_version(
        &client,
        &FileId::new("9001").unwrap(),
        &attrs("x.txt"),
        &content,
    )
    .await
    .expect("version upload failed");

    assert_eq!(item.id, "9001");
}

#[tokio::test]
async fn test_upload_empty_file() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_upload_new(&server, "9002", "empty.txt", CONTENT_SHA1).await;
    let (_dir, content) = local_file(b"");

    let item = upload::upload_new(&client, &FolderId::root(), &attrs("empty.txt"), &content)
        .await
        .expect("empty upload failed");

    assert_eq!(item.id, "9002");
}

#[tokio::test]
async fn test_upload_transport_error_is_fatal() {
    let server = MockServer::start().await;
    let client = BoxClient::with_base_urls("token", server.uri(), server.uri());
    let (_dir, content) = local_file(b"data");

    Mock::given(method("POST"))
        .and(path("/files/content"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = upload::upload_new(&client, &FolderId::root(), &attrs("x.txt"), &content).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_upload_missing_local_file_is_error() {
    let (_server, client) = common::setup_box_mock().await;

    let result = upload::upload_new(
        &client,
        &FolderId::root(),
        &attrs("ghost.txt"),
        std::path::Path::new("/nonexistent/ghost.txt"),
    )
    .await;
    assert!(result.is_err());
}
