//! Persisted surcharge record store (SQLite).
//!
//! Two logical tables: `surcharge_record` holds the canonical time-series
//! records, `sync_log` holds one idempotence marker per ingested date.
//! All writes flow through [`crate::ingest`]; everything here is plain
//! per-operation repository functions in the style of `repo.rs`.

pub mod models;
pub mod repo;

pub use models::SyncLogEntry;
