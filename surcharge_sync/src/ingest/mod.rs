//! Ingestion coordination: feed -> normalizer -> store, idempotently.
//!
//! ## Idempotence
//! Each effective date runs at most once: a committed run writes a `sync_log`
//! row, and later non-forced calls for the same date return
//! [`IngestOutcome::Skipped`] without touching the feed. A run that produced
//! zero records writes **no** log row, so the date stays eligible for a later
//! natural retry once the vendor publishes data.
//!
//! ## Transactions & consistency
//! All store mutations of one run happen inside a single `BEGIN IMMEDIATE`
//! transaction via `SqliteConnection::immediate_transaction`: either the whole
//! replace-and-log commits, or none of it does. Records are replaced by their
//! exact natural key `(type, start_date, carrier_code, route)` so a re-sync
//! never destroys unrelated carriers' rows for the same day.
//!
//! ## Failure policy
//! Per-type feed failures are absorbed here (logged, degraded to zero rows);
//! malformed rows were already dropped by the normalizer. Store failures
//! abort the transaction and surface as `Err`; with no log row written, the
//! failed date remains retryable.

use anyhow::Result;
use chrono::NaiveDate;
use diesel::SqliteConnection;
use feed_ingestor::{
    models::{
        cell::RawCell,
        record::{SurchargeRecord, SurchargeType},
    },
    normalize::normalize_rows,
    providers::FeedProvider,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::store::repo;

/// Caller-visible result of one ingestion call.
///
/// Three distinct outcomes reach the caller: skipped, synced with a count, or
/// `Err` from the surrounding `Result`. They are deliberately not collapsed
/// into a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IngestOutcome {
    /// A sync-log entry for the date already existed and `force` was false.
    Skipped,
    /// The run completed; `record_count` is zero when the feed had no data.
    Synced {
        /// Number of records committed by this run.
        record_count: usize,
    },
}

impl IngestOutcome {
    /// True when the run was skipped due to the sync log.
    pub fn is_skipped(&self) -> bool {
        matches!(self, IngestOutcome::Skipped)
    }

    /// Records committed by this call (zero for a skip).
    pub fn record_count(&self) -> usize {
        match self {
            IngestOutcome::Skipped => 0,
            IngestOutcome::Synced { record_count } => *record_count,
        }
    }
}

/// Runs one ingestion for `effective_date`.
///
/// Fetches both surcharge types concurrently, normalizes whatever came back,
/// and replaces matching records in the store by natural key. See the module
/// docs for idempotence and failure semantics.
pub async fn ingest_date(
    conn: &mut SqliteConnection,
    provider: &dyn FeedProvider,
    effective_date: NaiveDate,
    force: bool,
) -> Result<IngestOutcome> {
    if !force && repo::get_sync_log(conn, effective_date)?.is_some() {
        info!(%effective_date, "already synced, skipping");
        return Ok(IngestOutcome::Skipped);
    }

    // The two types are independent; fetch them concurrently and let either
    // fail on its own.
    let (fuel_rows, security_rows) = tokio::join!(
        fetch_tolerant(provider, SurchargeType::Fuel, effective_date),
        fetch_tolerant(provider, SurchargeType::Security, effective_date),
    );

    let mut records = normalize_rows(&fuel_rows, SurchargeType::Fuel);
    records.extend(normalize_rows(&security_rows, SurchargeType::Security));

    if records.is_empty() {
        info!(%effective_date, "feed yielded no records, nothing to commit");
        return Ok(IngestOutcome::Synced { record_count: 0 });
    }

    let record_count = records.len();
    conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
        replace_by_natural_key(conn, &records)?;
        repo::insert_sync_log(conn, effective_date, record_count as i32)?;
        Ok(())
    })?;

    info!(%effective_date, record_count, "ingestion run committed");
    Ok(IngestOutcome::Synced { record_count })
}

/// Delete phase over every incoming natural key, then one bulk insert.
fn replace_by_natural_key(
    conn: &mut SqliteConnection,
    records: &[SurchargeRecord],
) -> Result<()> {
    for record in records {
        repo::delete_by_natural_key(
            conn,
            record.surcharge_type,
            record.start_date,
            &record.carrier_code,
            &record.route,
        )?;
    }
    repo::insert_records(conn, records)?;
    Ok(())
}

async fn fetch_tolerant(
    provider: &dyn FeedProvider,
    surcharge_type: SurchargeType,
    effective_date: NaiveDate,
) -> Vec<Vec<RawCell>> {
    match provider.fetch_rows(surcharge_type, effective_date).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(%surcharge_type, %effective_date, error = %e, "feed fetch failed, zero rows for this type");
            Vec::new()
        }
    }
}
