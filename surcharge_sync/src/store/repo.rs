//! Store operations over the surcharge record and sync log tables.

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use feed_ingestor::models::record::{SurchargeRecord, SurchargeType};

use crate::{
    schema::{surcharge_record, sync_log},
    store::models::{
        NewSurchargeRow, NewSyncLogRow, SurchargeRow, SyncLogEntry, SyncLogRow, date_to_text,
    },
};

/// Bulk-inserts normalized records. Returns the number of rows written.
pub fn insert_records(
    conn: &mut SqliteConnection,
    records: &[SurchargeRecord],
) -> anyhow::Result<usize> {
    let rows: Vec<NewSurchargeRow<'_>> = records.iter().map(NewSurchargeRow::from).collect();
    let n = diesel::insert_into(surcharge_record::table)
        .values(&rows)
        .execute(conn)?;
    Ok(n)
}

/// Deletes records matching the exact natural key
/// `(type, start_date, carrier_code, route)`.
///
/// The full four-part key is deliberate: deleting by anything coarser (say,
/// type + start date) wipes unrelated carriers sharing the same day.
pub fn delete_by_natural_key(
    conn: &mut SqliteConnection,
    surcharge_type: SurchargeType,
    start_date: NaiveDate,
    carrier_code: &str,
    route: &str,
) -> anyhow::Result<usize> {
    use crate::schema::surcharge_record::dsl as sr;

    let n = diesel::delete(
        sr::surcharge_record.filter(
            sr::surcharge_type
                .eq(surcharge_type.code())
                .and(sr::start_date.eq(date_to_text(start_date)))
                .and(sr::carrier_code.eq(carrier_code))
                .and(sr::route.eq(route)),
        ),
    )
    .execute(conn)?;
    Ok(n)
}

/// Loads the full record set, most recent start date first.
pub fn select_all(conn: &mut SqliteConnection) -> anyhow::Result<Vec<SurchargeRecord>> {
    let rows = surcharge_record::table
        .select(SurchargeRow::as_select())
        .order(surcharge_record::start_date.desc())
        .load::<SurchargeRow>(conn)?;

    rows.into_iter().map(SurchargeRow::into_record).collect()
}

/// Looks up the sync-log entry for one effective date, if any.
pub fn get_sync_log(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> anyhow::Result<Option<SyncLogEntry>> {
    let row = sync_log::table
        .filter(sync_log::sync_date.eq(date_to_text(date)))
        .select(SyncLogRow::as_select())
        .first::<SyncLogRow>(conn)
        .optional()?;

    row.map(SyncLogRow::into_entry).transpose()
}

/// The most recent sync-log entry by effective date, for "last synced" display.
pub fn latest_sync_log(conn: &mut SqliteConnection) -> anyhow::Result<Option<SyncLogEntry>> {
    let row = sync_log::table
        .order(sync_log::sync_date.desc())
        .select(SyncLogRow::as_select())
        .first::<SyncLogRow>(conn)
        .optional()?;

    row.map(SyncLogRow::into_entry).transpose()
}

/// Records a completed ingestion run.
///
/// One entry per date; a forced re-sync for an already-logged date refreshes
/// that entry in place instead of violating the unique `sync_date`.
pub fn insert_sync_log(
    conn: &mut SqliteConnection,
    date: NaiveDate,
    record_count: i32,
) -> anyhow::Result<usize> {
    let row = NewSyncLogRow {
        sync_date: date_to_text(date),
        record_count,
        synced_at: Utc::now().to_rfc3339(),
    };
    let n = diesel::insert_into(sync_log::table)
        .values(&row)
        .on_conflict(sync_log::sync_date)
        .do_update()
        .set((
            sync_log::record_count.eq(record_count),
            sync_log::synced_at.eq(row.synced_at.clone()),
        ))
        .execute(conn)?;
    Ok(n)
}
