//! Canonical surcharge record store, ingestion coordination, and analytics.
//!
//! This crate owns the persisted side of the FSC/SCC pipeline: it drives a
//! [`feed_ingestor::providers::FeedProvider`] to pull and normalize a day's
//! feed, deduplicates the result into a SQLite store by natural key, and
//! exposes read-only query and aggregation functions over record snapshots.
//!
//! Writes go through [`ingest`] exclusively; [`query`] and [`analytics`] are
//! pure functions over records the caller already loaded (via
//! [`store::repo::select_all`]) and are safe to call from any number of
//! request contexts at once.

#![deny(missing_docs)]

pub mod analytics;
pub mod carriers;
pub mod db;
pub mod ingest;
pub mod query;
pub mod rates;
pub mod schema;
pub mod store;
