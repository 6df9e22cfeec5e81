//! Fetching and normalization of third-party airline surcharge feeds.
//!
//! The vendor publishes fuel (FSC) and security (SCC) surcharge tables as
//! spreadsheet workbooks behind a date-parameterized HTTP endpoint. This crate
//! downloads those workbooks, flattens them into untyped [`models::cell::RawCell`]
//! rows, and normalizes each row into the canonical
//! [`models::record::SurchargeRecord`] that the rest of the pipeline operates on.
//!
//! Everything vendor-specific lives behind the [`providers::FeedProvider`]
//! trait; normalization is pure and spreadsheet-library-agnostic.

pub mod models;
pub mod normalize;
pub mod providers;
