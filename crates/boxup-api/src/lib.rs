//! boxup API - Box REST API adapter
//!
//! Implements the [`IRemoteStorage`](boxup_core::ports::IRemoteStorage) port
//! against the Box content API.
//!
//! ## Modules
//!
//! - [`client`] - typed bearer-auth HTTP client with separate metadata and
//!   upload base URLs
//! - [`folders`] - folder item listing, child/item lookup, folder creation
//! - [`upload`] - multipart streaming upload and content replacement
//! - [`timestamp`] - RFC 3339 timestamp normalization for Box attributes
//! - [`provider`] - the `IRemoteStorage` implementation

pub mod client;
pub mod folders;
pub mod provider;
pub mod timestamp;
pub mod upload;
