//! Canonical in-memory representation of one surcharge entry.
//!
//! This struct is the standard output of normalization and the standard input
//! of the query and analytics layers, regardless of which vendor feed the row
//! originally came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which surcharge category a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurchargeType {
    /// Fuel surcharge (FSC).
    Fuel,
    /// Security surcharge (SCC).
    Security,
}

impl SurchargeType {
    /// The two-letter wire code the vendor endpoint and the store use.
    pub fn code(self) -> &'static str {
        match self {
            SurchargeType::Fuel => "FS",
            SurchargeType::Security => "SC",
        }
    }

    /// Parses a wire code back into a type. Case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "FS" => Some(SurchargeType::Fuel),
            "SC" => Some(SurchargeType::Security),
            _ => None,
        }
    }
}

impl std::fmt::Display for SurchargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Native currency of a surcharge amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// South Korean won, the reporting currency.
    Krw,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Japanese yen.
    Jpy,
    /// Chinese yuan.
    Cny,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Krw => "KRW",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
        }
    }

    /// Parses an ISO code, case-insensitive. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "KRW" => Some(Currency::Krw),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "JPY" => Some(Currency::Jpy),
            "CNY" => Some(Currency::Cny),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single carrier/date-range/charge entry for fuel or security fees.
///
/// Invariants upheld by the normalizer:
/// - `carrier_code` is non-empty (rows without one are dropped);
/// - `start_date <= end_date`, with "no expiry" encoded as the far-future
///   sentinel date;
/// - charge fields are finite and non-negative when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurchargeRecord {
    /// Fuel or security.
    pub surcharge_type: SurchargeType,
    /// Carrier identifier, at most 3 characters (e.g. "KE", "OZ").
    pub carrier_code: String,
    /// Display name; the vendor feed usually leaves this empty.
    pub carrier_name: Option<String>,
    /// First day the charge applies, inclusive.
    pub start_date: NaiveDate,
    /// Last day the charge applies, inclusive.
    pub end_date: NaiveDate,
    /// Native currency of the charge amounts.
    pub currency: Currency,
    /// Minimum charge floor, if published.
    pub min_charge: Option<f64>,
    /// Per-kilogram charge above the floor, if published.
    pub over_charge: Option<f64>,
    /// Textual lane/route applicability, at most 255 characters.
    pub route: String,
    /// Free-text note, at most 255 characters.
    pub remark: Option<String>,
    /// Short category tag from the feed (e.g. "FS"), at most 3 characters.
    pub charge_code: String,
}
