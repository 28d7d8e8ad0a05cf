//! Shared test helpers for Box API integration tests
//!
//! Provides wiremock-based mock server setup. Box splits metadata and
//! upload traffic across two hosts; in tests both base URLs point at the
//! same mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxup_api::client::BoxClient;

/// Starts a mock server and returns it with a client pointed at it.
pub async fn setup_box_mock() -> (MockServer, BoxClient) {
    let server = MockServer::start().await;
    let client = BoxClient::with_base_urls("test-access-token", server.uri(), server.uri());
    (server, client)
}

/// Mounts a single-page folder items listing for the given folder ID.
pub async fn mount_folder_items(
    server: &MockServer,
    folder_id: &str,
    entries: serde_json::Value,
) {
    let count = entries.as_array().map(|a| a.len()).unwrap_or(0);
    Mock::given(method("GET"))
        .and(path(format!("/folders/{}/items", folder_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": count,
            "entries": entries
        })))
        .mount(server)
        .await;
}

/// Mounts one page of a paginated folder listing at a specific offset.
pub async fn mount_folder_items_page(
    server: &MockServer,
    folder_id: &str,
    offset: u64,
    total_count: u64,
    entries: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/folders/{}/items", folder_id)))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": total_count,
            "entries": entries
        })))
        .mount(server)
        .await;
}

/// Mounts a successful folder creation returning the given folder ID.
pub async fn mount_create_folder(server: &MockServer, new_folder_id: &str, name: &str) {
    Mock::given(method("POST"))
        .and(path("/folders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "type": "folder",
            "id": new_folder_id,
            "name": name
        })))
        .mount(server)
        .await;
}

/// Mounts a successful new-file upload response.
pub async fn mount_upload_new(server: &MockServer, file_id: &str, name: &str, sha1: &str) {
    Mock::given(method("POST"))
        .and(path("/files/content"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "total_count": 1,
            "entries": [{
                "type": "file",
                "id": file_id,
                "name": name,
                "sha1": sha1
            }]
        })))
        .mount(server)
        .await;
}

/// Mounts a successful file-version upload response for an existing file.
pub async fn mount_upload_version(server: &MockServer, file_id: &str, name: &str, sha1: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/files/{}/content", file_id)))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "total_count": 1,
            "entries": [{
                "type": "file",
                "id": file_id,
                "name": name,
                "sha1": sha1
            }]
        })))
        .mount(server)
        .await;
}
