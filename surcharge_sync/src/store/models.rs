//! Insertable/Queryable helper structs used by the repository implementation.

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use feed_ingestor::models::record::{Currency, SurchargeRecord, SurchargeType};
use serde::Serialize;

use crate::schema::{surcharge_record, sync_log};

/// Date format used for every date column; lexicographic order == date order.
pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

pub(crate) fn date_to_text(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

#[derive(Insertable, Debug)]
#[diesel(table_name = surcharge_record)]
pub(crate) struct NewSurchargeRow<'a> {
    pub(crate) surcharge_type: &'a str,
    pub(crate) carrier_code: &'a str,
    pub(crate) carrier_name: Option<&'a str>,
    pub(crate) start_date: String, // YYYY-MM-DD
    pub(crate) end_date: String,   // YYYY-MM-DD
    pub(crate) currency: &'a str,
    pub(crate) min_charge: Option<f64>,
    pub(crate) over_charge: Option<f64>,
    pub(crate) route: &'a str,
    pub(crate) remark: Option<&'a str>,
    pub(crate) charge_code: &'a str,
}

impl<'a> From<&'a SurchargeRecord> for NewSurchargeRow<'a> {
    fn from(record: &'a SurchargeRecord) -> Self {
        Self {
            surcharge_type: record.surcharge_type.code(),
            carrier_code: &record.carrier_code,
            carrier_name: record.carrier_name.as_deref(),
            start_date: date_to_text(record.start_date),
            end_date: date_to_text(record.end_date),
            currency: record.currency.code(),
            min_charge: record.min_charge,
            over_charge: record.over_charge,
            route: &record.route,
            remark: record.remark.as_deref(),
            charge_code: &record.charge_code,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = surcharge_record)]
pub(crate) struct SurchargeRow {
    pub(crate) id: Option<i32>,
    pub(crate) surcharge_type: String,
    pub(crate) carrier_code: String,
    pub(crate) carrier_name: Option<String>,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) currency: String,
    pub(crate) min_charge: Option<f64>,
    pub(crate) over_charge: Option<f64>,
    pub(crate) route: String,
    pub(crate) remark: Option<String>,
    pub(crate) charge_code: String,
    pub(crate) created_at: String,
}

impl SurchargeRow {
    /// Strict conversion back to the canonical record type.
    ///
    /// The store only contains what the normalizer wrote, so a row that no
    /// longer parses indicates store corruption and gets surfaced, not fixed.
    pub(crate) fn into_record(self) -> anyhow::Result<SurchargeRecord> {
        let surcharge_type = SurchargeType::from_code(&self.surcharge_type)
            .with_context(|| format!("unknown surcharge type {:?}", self.surcharge_type))?;
        let currency = Currency::from_code(&self.currency)
            .with_context(|| format!("unknown currency {:?}", self.currency))?;
        let start_date = NaiveDate::parse_from_str(&self.start_date, DATE_FMT)
            .with_context(|| format!("bad start_date {:?}", self.start_date))?;
        let end_date = NaiveDate::parse_from_str(&self.end_date, DATE_FMT)
            .with_context(|| format!("bad end_date {:?}", self.end_date))?;

        Ok(SurchargeRecord {
            surcharge_type,
            carrier_code: self.carrier_code,
            carrier_name: self.carrier_name,
            start_date,
            end_date,
            currency,
            min_charge: self.min_charge,
            over_charge: self.over_charge,
            route: self.route,
            remark: self.remark,
            charge_code: self.charge_code,
        })
    }
}

/// One completed ingestion run, keyed by its effective date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncLogEntry {
    /// The effective date the run ingested.
    pub sync_date: NaiveDate,
    /// How many records that run committed.
    pub record_count: i32,
    /// When the run committed.
    pub synced_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = sync_log)]
pub(crate) struct NewSyncLogRow {
    pub(crate) sync_date: String,
    pub(crate) record_count: i32,
    pub(crate) synced_at: String, // RFC3339 UTC
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = sync_log)]
pub(crate) struct SyncLogRow {
    pub(crate) id: Option<i32>,
    pub(crate) sync_date: String,
    pub(crate) record_count: i32,
    pub(crate) synced_at: String,
}

impl SyncLogRow {
    pub(crate) fn into_entry(self) -> anyhow::Result<SyncLogEntry> {
        let sync_date = NaiveDate::parse_from_str(&self.sync_date, DATE_FMT)
            .with_context(|| format!("bad sync_date {:?}", self.sync_date))?;
        let synced_at = DateTime::parse_from_rfc3339(&self.synced_at)
            .with_context(|| format!("bad synced_at {:?}", self.synced_at))?
            .with_timezone(&Utc);
        Ok(SyncLogEntry {
            sync_date,
            record_count: self.record_count,
            synced_at,
        })
    }
}
