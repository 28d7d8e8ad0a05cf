//! boxup Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain types** - `LocalEntry`, `SyncDecision`, `RunTally`, validated newtypes
//! - **Port definitions** - `IRemoteStorage`, the contract boxup requires of
//!   the remote file-storage service
//! - **Configuration** - typed YAML configuration with defaults
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement.

pub mod config;
pub mod domain;
pub mod ports;
