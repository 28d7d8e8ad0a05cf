//! Box API client
//!
//! Provides a typed HTTP client for the Box content API. Handles bearer
//! authentication and endpoint construction. Box splits its surface across
//! two hosts: metadata operations live on `api.box.com` while content
//! uploads go to `upload.box.com`, so the client carries both base URLs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use boxup_api::client::BoxClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = BoxClient::new("access-token-here");
//! let response = client.request(reqwest::Method::GET, "/folders/0/items").send().await?;
//! # Ok(())
//! # }
//! ```

use boxup_core::config::ApiConfig;
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;

/// HTTP client for Box API calls
///
/// Wraps `reqwest::Client` with authentication headers and base URL
/// construction. Both base URLs can be overridden, which the integration
/// tests use to point at a wiremock server.
pub struct BoxClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for metadata requests
    base_url: String,
    /// Base URL for content upload requests
    upload_url: String,
    /// OAuth2 access token
    access_token: String,
}

impl BoxClient {
    /// Creates a new `BoxClient` with the given access token and the
    /// production Box endpoints.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::from_config(access_token, &ApiConfig::default())
    }

    /// Creates a `BoxClient` from endpoint configuration.
    pub fn from_config(access_token: impl Into<String>, api: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: api.base_url.clone(),
            upload_url: api.upload_url.clone(),
            access_token: access_token.into(),
        }
    }

    /// Creates a `BoxClient` with explicit base URLs (useful for testing).
    pub fn with_base_urls(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        upload_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            upload_url: upload_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Updates the access token.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
        debug!("Updated BoxClient access token");
    }

    /// Returns the current access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Creates an authenticated request builder against the metadata host.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL (e.g., "/folders/0/items")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Creates an authenticated request builder against the upload host.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the upload URL (e.g., "/files/content")
    pub fn upload_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.upload_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Returns the metadata base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the upload base URL.
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}
