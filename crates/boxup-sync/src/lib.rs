//! boxup Sync - directory mirroring engine
//!
//! Mirrors a local directory tree onto the remote service: new files are
//! uploaded, changed files optionally overwritten, unchanged files skipped.
//! Exactly one file is in flight through the pipeline at any moment; this
//! is a deliberate admission-control policy, not an accident of the
//! traversal.
//!
//! ## Modules
//!
//! - [`engine`] - per-entry decision engine, upload executor, and run loop
//! - [`walker`] - channel-fed recursive tree walker
//! - [`resolver`] - fetch-or-create remote folder resolution
//! - [`hash`] - streaming SHA-1 content fingerprinting
//! - [`progress`] - progress reporting trait consumed by the run loop

pub mod engine;
pub mod hash;
pub mod progress;
pub mod resolver;
pub mod walker;
