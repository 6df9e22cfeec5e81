//! Boundary normalization of raw vendor rows into [`SurchargeRecord`]s.
//!
//! The vendor workbook is hand-maintained and messy: dates arrive as
//! spreadsheet serial numbers, ISO strings, dotted or slashed strings, or
//! "9999" no-expiry sentinels; numbers may carry thousands separators; cells
//! may simply be blank. Everything is resolved here, once, so downstream code
//! only ever sees the strict record type.
//!
//! Malformed rows are expected and are skipped silently, never raised.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{
    cell::RawCell,
    record::{Currency, SurchargeRecord, SurchargeType},
};

/// Fixed column layout of the vendor sheet (after the header row).
mod col {
    pub const TYPE_MARKER: usize = 0;
    pub const CARRIER: usize = 1;
    pub const START_DATE: usize = 2;
    pub const END_DATE: usize = 3;
    pub const CURRENCY: usize = 4;
    pub const MIN_CHARGE: usize = 5;
    pub const OVER_CHARGE: usize = 6;
    pub const ROUTE: usize = 7;
    pub const REMARK: usize = 8;
}

/// Years beyond this are treated as "no expiry" rather than real dates.
const MAX_YEAR: i32 = 2100;

/// The fixed far-future date that "no expiry" normalizes to.
pub fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).expect("valid sentinel date")
}

/// Day zero of the spreadsheet serial-date scheme.
fn spreadsheet_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid epoch date")
}

/// Outcome of parsing one date cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// A real calendar date.
    Valid(NaiveDate),
    /// A "no expiry" marker; callers substitute [`far_future`].
    Sentinel,
    /// Nothing date-like could be extracted.
    Invalid,
}

/// Parses a date cell, trying in order: spreadsheet serial number, no-expiry
/// sentinel markers, strict `YYYY-MM-DD`, then `YYYY.M.D` / `YYYY/M/D`.
///
/// Any parsed year above 2100 is clamped to [`ParsedDate::Sentinel`].
pub fn parse_date(cell: &RawCell) -> ParsedDate {
    match cell {
        RawCell::Number(n) => serial_to_date(*n),
        RawCell::Text(s) => parse_date_str(s.trim()),
        RawCell::Empty => ParsedDate::Invalid,
    }
}

fn serial_to_date(serial: f64) -> ParsedDate {
    if !serial.is_finite() || serial <= 0.0 {
        return ParsedDate::Invalid;
    }
    // Whole days since 1899-12-30; intraday fractions are irrelevant here.
    let days = serial.trunc() as i64;
    match spreadsheet_epoch().checked_add_signed(Duration::days(days)) {
        Some(date) => clamp_year(date),
        None => ParsedDate::Invalid,
    }
}

fn parse_date_str(s: &str) -> ParsedDate {
    if s.is_empty() {
        return ParsedDate::Invalid;
    }
    // "9999-12-31", "2099-99-99" and friends all mean "no expiry".
    if s.contains("9999") || s.contains("99-99") {
        return ParsedDate::Sentinel;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return clamp_year(date);
    }
    // "2025.1.5" / "2025/1/5": split and zero-pad month/day.
    let parts: Vec<&str> = s.split(['.', '/']).collect();
    if parts.len() == 3
        && let (Ok(y), Ok(m), Ok(d)) = (
            parts[0].trim().parse::<i32>(),
            parts[1].trim().parse::<u32>(),
            parts[2].trim().parse::<u32>(),
        )
        && let Some(date) = NaiveDate::from_ymd_opt(y, m, d)
    {
        return clamp_year(date);
    }
    ParsedDate::Invalid
}

fn clamp_year(date: NaiveDate) -> ParsedDate {
    if date.year() > MAX_YEAR {
        ParsedDate::Sentinel
    } else {
        ParsedDate::Valid(date)
    }
}

/// Parses a charge cell into a finite, non-negative number.
///
/// Strings are stripped of thousands separators (commas and whitespace) before
/// parsing. Anything unusable yields `None`, never zero and never an error.
pub fn parse_charge(cell: &RawCell) -> Option<f64> {
    match cell {
        RawCell::Number(n) if n.is_finite() && *n >= 0.0 => Some(*n),
        RawCell::Text(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
        }
        _ => None,
    }
}

fn bounded(s: &str, max_chars: usize) -> String {
    s.trim().chars().take(max_chars).collect()
}

fn cell_at<'a>(row: &'a [RawCell], idx: usize) -> &'a RawCell {
    row.get(idx).unwrap_or(&RawCell::Empty)
}

/// Normalizes one raw row into a [`SurchargeRecord`].
///
/// Returns `None` (a silent skip, not an error) when the row has no usable
/// carrier code or no parseable start date. A missing or unparseable end date
/// defaults to the far-future sentinel instead.
pub fn normalize_row(row: &[RawCell], surcharge_type: SurchargeType) -> Option<SurchargeRecord> {
    let carrier_code = cell_at(row, col::CARRIER).text()?;

    let start_date = match parse_date(cell_at(row, col::START_DATE)) {
        ParsedDate::Valid(date) => date,
        // A sentinel start would make the record active never/forever-from-now;
        // the feed has no legitimate row shaped like that.
        ParsedDate::Sentinel | ParsedDate::Invalid => return None,
    };
    let end_date = match parse_date(cell_at(row, col::END_DATE)) {
        ParsedDate::Valid(date) if date >= start_date => date,
        _ => far_future(),
    };

    let currency = cell_at(row, col::CURRENCY)
        .text()
        .and_then(|s| Currency::from_code(&bounded(&s, 3)))
        .unwrap_or(Currency::Krw);

    let charge_code = cell_at(row, col::TYPE_MARKER)
        .text()
        .map(|s| bounded(&s, 3))
        .unwrap_or_else(|| surcharge_type.code().to_string());

    Some(SurchargeRecord {
        surcharge_type,
        carrier_code: bounded(&carrier_code, 3),
        carrier_name: None,
        start_date,
        end_date,
        currency,
        min_charge: parse_charge(cell_at(row, col::MIN_CHARGE)),
        over_charge: parse_charge(cell_at(row, col::OVER_CHARGE)),
        route: cell_at(row, col::ROUTE)
            .text()
            .map(|s| bounded(&s, 255))
            .unwrap_or_default(),
        remark: cell_at(row, col::REMARK).text().map(|s| bounded(&s, 255)),
        charge_code,
    })
}

/// Normalizes a whole sheet, dropping unusable rows.
pub fn normalize_rows(rows: &[Vec<RawCell>], surcharge_type: SurchargeType) -> Vec<SurchargeRecord> {
    rows.iter()
        .filter_map(|row| normalize_row(row, surcharge_type))
        .collect()
}
