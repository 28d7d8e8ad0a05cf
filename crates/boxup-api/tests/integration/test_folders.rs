//! Integration tests for folder listing, lookup, and creation

use boxup_core::domain::newtypes::FolderId;
use boxup_core::ports::remote_storage::ItemKind;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxup_api::client::BoxClient;
use boxup_api::folders;

use crate::common;

// ============================================================================
// Child folder lookup
// ============================================================================

#[tokio::test]
async fn test_find_child_folder_returns_id() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_folder_items(
        &server,
        "0",
        serde_json::json!([
            {"type": "file", "id": "10", "name": "readme.txt", "sha1": null},
            {"type": "folder", "id": "42", "name": "backup"}
        ]),
    )
    .await;

    let found = folders::find_child_folder(&client, &FolderId::root(), "backup")
        .await
        .expect("lookup failed");

    assert_eq!(found, Some(FolderId::new("42").unwrap()));
}

#[tokio::test]
async fn test_find_child_folder_absent_is_none_not_error() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_folder_items(&server, "0", serde_json::json!([])).await;

    let found = folders::find_child_folder(&client, &FolderId::root(), "missing")
        .await
        .expect("lookup failed");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_child_folder_ignores_file_of_same_name() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_folder_items(
        &server,
        "0",
        serde_json::json!([
            {"type": "file", "id": "10", "name": "backup", "sha1": null}
        ]),
    )
    .await;

    let found = folders::find_child_folder(&client, &FolderId::root(), "backup")
        .await
        .expect("lookup failed");

    assert!(found.is_none());
}

// ============================================================================
// Item lookup
// ============================================================================

#[tokio::test]
async fn test_find_item_returns_file_with_fingerprint() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_folder_items(
        &server,
        "42",
        serde_json::json!([
            {"type": "file", "id": "99", "name": "x.txt",
             "sha1": "85136c79cbf9fe36bb9d05d0639c70c265c18d37"}
        ]),
    )
    .await;

    let item = folders::find_item(&client, &FolderId::new("42").unwrap(), "x.txt")
        .await
        .expect("lookup failed")
        .expect("item should exist");

    assert_eq!(item.kind, ItemKind::File);
    assert_eq!(item.id, "99");
    assert_eq!(
        item.sha1.unwrap().as_str(),
        "85136c79cbf9fe36bb9d05d0639c70c265c18d37"
    );
}

#[tokio::test]
async fn test_find_item_reports_folder_kind() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_folder_items(
        &server,
        "0",
        serde_json::json!([{"type": "folder", "id": "7", "name": "x.txt"}]),
    )
    .await;

    let item = folders::find_item(&client, &FolderId::root(), "x.txt")
        .await
        .expect("lookup failed")
        .expect("item should exist");

    assert_eq!(item.kind, ItemKind::Folder);
    assert!(item.sha1.is_none());
}

#[tokio::test]
async fn test_find_item_follows_pagination() {
    let (server, client) = common::setup_box_mock().await;
    common::mount_folder_items_page(
        &server,
        "0",
        0,
        3,
        serde_json::json!([
            {"type": "file", "id": "1", "name": "a.txt", "sha1": null},
            {"type": "file", "id": "2", "name": "b.txt", "sha1": null}
        ]),
    )
    .await;
    common::mount_folder_items_page(
        &server,
        "0",
        2,
        3,
        serde_json::json!([
            {"type": "file", "id": "3", "name": "c.txt", "sha1": null}
        ]),
    )
    .await;

    let item = folders::find_item(&client, &FolderId::root(), "c.txt")
        .await
        .expect("lookup failed")
        .expect("item on second page should be found");

    assert_eq!(item.id, "3");
}

#[tokio::test]
async fn test_listing_error_status_is_fatal() {
    let server = MockServer::start().await;
    let client = BoxClient::with_base_urls("token", server.uri(), server.uri());

    Mock::given(method("GET"))
        .and(path("/folders/0/items"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = folders::find_item(&client, &FolderId::root(), "x.txt").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_unauthorized_listing_is_fatal() {
    let server = MockServer::start().await;
    let client = BoxClient::with_base_urls("bad-token", server.uri(), server.uri());

    Mock::given(method("GET"))
        .and(path("/folders/0/items"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = folders::find_child_folder(&client, &FolderId::root(), "backup").await;
    assert!(result.is_err());
}

// ============================================================================
// Folder creation
// ============================================================================

#[tokio::test]
async fn test_create_folder_posts_name_and_parent() {
    let (server, client) = common::setup_box_mock().await;

    Mock::given(method("POST"))
        .and(path("/folders"))
        .and(body_json(serde_json::json!({
            "name": "photos",
            "parent": {"id": "42"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "type": "folder",
            "id": "4242",
            "name": "photos"
        })))
        .mount(&server)
        .await;

    let id = folders::create_folder(&client, &FolderId::new("42").unwrap(), "photos")
        .await
        .expect("creation failed");

    assert_eq!(id.as_str(), "4242");
}

#[tokio::test]
async fn test_create_folder_conflict_fetches_existing() {
    let (server, client) = common::setup_box_mock().await;

    Mock::given(method("POST"))
        .and(path("/folders"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "type": "error",
            "status": 409,
            "code": "item_name_in_use"
        })))
        .mount(&server)
        .await;
    common::mount_folder_items(
        &server,
        "0",
        serde_json::json!([{"type": "folder", "id": "55", "name": "backup"}]),
    )
    .await;

    let id = folders::create_folder(&client, &FolderId::root(), "backup")
        .await
        .expect("conflict should resolve to the existing folder");

    assert_eq!(id.as_str(), "55");
}

#[tokio::test]
async fn test_create_folder_other_error_is_fatal() {
    let (server, client) = common::setup_box_mock().await;

    Mock::given(method("POST"))
        .and(path("/folders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = folders::create_folder(&client, &FolderId::root(), "backup").await;
    assert!(result.is_err());
}
