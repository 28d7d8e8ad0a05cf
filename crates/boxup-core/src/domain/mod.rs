//! Domain layer - entities, value objects, and domain errors
//!
//! Pure business types with no I/O. Everything here is constructed and
//! consumed within a single mirror run; nothing is persisted.

pub mod decision;
pub mod entry;
pub mod errors;
pub mod newtypes;
pub mod tally;

pub use decision::SyncDecision;
pub use entry::LocalEntry;
pub use errors::{DomainError, FileError};
pub use newtypes::{ContentHash, FileId, FolderId, RemotePath};
pub use tally::RunTally;
