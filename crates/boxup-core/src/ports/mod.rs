//! Port definitions (hexagonal architecture interfaces)
//!
//! Ports are the interfaces the sync core depends on; their implementations
//! live in adapter crates. There is a single port here:
//!
//! - [`IRemoteStorage`] - the contract boxup requires of the remote
//!   hierarchical file-storage service (Box via its REST API, but the trait
//!   is provider-agnostic).

pub mod remote_storage;

pub use remote_storage::{IRemoteStorage, ItemKind, RemoteItem, UploadAttrs};
