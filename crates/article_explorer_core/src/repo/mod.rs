//! Persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the snapshot blob access contract used by the domain store.
//! - Isolate SQL details from domain orchestration.

pub mod snapshot_repo;
