//! Currency-normalized carrier comparison and monthly trend aggregation.
//!
//! Both entry points are pure functions over a record snapshot plus an
//! explicit [`CurrencyRates`] table. Records without an `over_charge` are
//! excluded from every aggregate: absent is absent, never zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use feed_ingestor::models::record::{SurchargeRecord, SurchargeType};
use indexmap::IndexMap;
use serde::Serialize;

use crate::rates::CurrencyRates;

/// How [`aggregate_by_carrier`] orders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Cheapest carrier first.
    Ascending,
    /// Most expensive carrier first.
    Descending,
}

/// Per-carrier aggregate of currently-valid charges, in KRW.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierStats {
    /// The carrier the aggregate covers.
    pub carrier_code: String,
    /// Arithmetic mean of converted `over_charge` values.
    pub average: f64,
    /// How many records contributed to the mean.
    pub sample_count: usize,
}

/// Groups currently-valid records of `surcharge_type` by carrier and computes
/// each carrier's mean charge in KRW.
///
/// "Currently valid" means `start_date <= today <= end_date`. The sort is
/// stable, so carriers with equal means keep their first-seen order.
pub fn aggregate_by_carrier(
    records: &[SurchargeRecord],
    surcharge_type: SurchargeType,
    rates: &CurrencyRates,
    today: NaiveDate,
    direction: SortDirection,
) -> Vec<CarrierStats> {
    let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for record in records {
        if record.surcharge_type != surcharge_type {
            continue;
        }
        if !(record.start_date <= today && today <= record.end_date) {
            continue;
        }
        let Some(charge) = record.over_charge else {
            continue;
        };
        groups
            .entry(record.carrier_code.as_str())
            .or_default()
            .push(charge * rates.rate(record.currency));
    }

    let mut stats: Vec<CarrierStats> = groups
        .into_iter()
        .map(|(code, charges)| CarrierStats {
            carrier_code: code.to_string(),
            average: charges.iter().sum::<f64>() / charges.len() as f64,
            sample_count: charges.len(),
        })
        .collect();

    match direction {
        SortDirection::Descending => stats.sort_by(|a, b| b.average.total_cmp(&a.average)),
        SortDirection::Ascending => stats.sort_by(|a, b| a.average.total_cmp(&b.average)),
    }
    stats
}

/// One month's aggregate for the trend chart, in KRW.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// Calendar month key, `YYYY-MM`.
    pub month: String,
    /// Mean converted charge for records starting that month.
    pub average: f64,
    /// Smallest converted charge that month.
    pub min: f64,
    /// Largest converted charge that month.
    pub max: f64,
    /// How many records contributed.
    pub sample_count: usize,
}

/// Window of retained trend months.
const TREND_MONTHS: usize = 12;

/// Buckets records of `surcharge_type` (optionally one carrier) into calendar
/// months by `start_date` and computes mean/min/max per month.
///
/// Expired records are included on purpose: the trend is history, not current
/// validity. Months are ordered ascending and truncated to the most recent
/// twelve month-keys present in the data.
pub fn monthly_trend(
    records: &[SurchargeRecord],
    carrier_code: Option<&str>,
    surcharge_type: SurchargeType,
    rates: &CurrencyRates,
) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        if record.surcharge_type != surcharge_type {
            continue;
        }
        if carrier_code.is_some_and(|c| c != record.carrier_code) {
            continue;
        }
        let Some(charge) = record.over_charge else {
            continue;
        };
        buckets
            .entry(record.start_date.format("%Y-%m").to_string())
            .or_default()
            .push(charge * rates.rate(record.currency));
    }

    let mut points: Vec<MonthlyPoint> = buckets
        .into_iter()
        .map(|(month, charges)| MonthlyPoint {
            average: charges.iter().sum::<f64>() / charges.len() as f64,
            min: charges.iter().copied().fold(f64::INFINITY, f64::min),
            max: charges.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            sample_count: charges.len(),
            month,
        })
        .collect();

    // BTreeMap gave us ascending month keys; keep only the tail window.
    if points.len() > TREND_MONTHS {
        points.drain(..points.len() - TREND_MONTHS);
    }
    points
}

/// Percent change of the mean across the retained trend window.
///
/// Defined only when at least two months are present (and the first month's
/// mean is nonzero); `None` otherwise rather than a fabricated zero.
pub fn percent_change(points: &[MonthlyPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let first = points.first()?;
    let last = points.last()?;
    if first.average == 0.0 {
        return None;
    }
    Some((last.average - first.average) / first.average * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_ingestor::models::record::Currency;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(
        carrier: &str,
        currency: Currency,
        over_charge: Option<f64>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SurchargeRecord {
        SurchargeRecord {
            surcharge_type: SurchargeType::Fuel,
            carrier_code: carrier.to_string(),
            carrier_name: None,
            start_date: start,
            end_date: end,
            currency,
            min_charge: None,
            over_charge,
            route: "ICN-LAX".to_string(),
            remark: None,
            charge_code: "FS".to_string(),
        }
    }

    fn far(y: i32) -> NaiveDate {
        ymd(y, 12, 31)
    }

    #[test]
    fn usd_charges_convert_through_the_rate_table() {
        let rates = CurrencyRates {
            usd: 1450.0,
            ..Default::default()
        };
        let records = vec![record(
            "KE",
            Currency::Usd,
            Some(2.5),
            ymd(2025, 1, 1),
            far(2099),
        )];
        let stats = aggregate_by_carrier(
            &records,
            SurchargeType::Fuel,
            &rates,
            ymd(2025, 2, 1),
            SortDirection::Descending,
        );
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].average, 3625.0);
        assert_eq!(stats[0].sample_count, 1);
    }

    #[test]
    fn absent_over_charge_is_excluded_not_zero() {
        let rates = CurrencyRates::default();
        let records = vec![
            record("KE", Currency::Krw, Some(100.0), ymd(2025, 1, 1), far(2099)),
            record("KE", Currency::Krw, None, ymd(2025, 1, 1), far(2099)),
        ];
        let stats = aggregate_by_carrier(
            &records,
            SurchargeType::Fuel,
            &rates,
            ymd(2025, 2, 1),
            SortDirection::Descending,
        );
        // Mean stays 100 and the absent record doesn't count as a sample.
        assert_eq!(stats[0].average, 100.0);
        assert_eq!(stats[0].sample_count, 1);
    }

    #[test]
    fn expired_records_do_not_enter_the_carrier_comparison() {
        let rates = CurrencyRates::default();
        let records = vec![record(
            "KE",
            Currency::Krw,
            Some(100.0),
            ymd(2024, 1, 1),
            ymd(2024, 6, 30),
        )];
        let stats = aggregate_by_carrier(
            &records,
            SurchargeType::Fuel,
            &rates,
            ymd(2025, 2, 1),
            SortDirection::Descending,
        );
        assert!(stats.is_empty());
    }

    #[test]
    fn ranking_follows_the_requested_direction() {
        let rates = CurrencyRates::default();
        let records = vec![
            record("KE", Currency::Krw, Some(100.0), ymd(2025, 1, 1), far(2099)),
            record("OZ", Currency::Krw, Some(300.0), ymd(2025, 1, 1), far(2099)),
        ];
        let desc = aggregate_by_carrier(
            &records,
            SurchargeType::Fuel,
            &rates,
            ymd(2025, 2, 1),
            SortDirection::Descending,
        );
        assert_eq!(desc[0].carrier_code, "OZ");
        let asc = aggregate_by_carrier(
            &records,
            SurchargeType::Fuel,
            &rates,
            ymd(2025, 2, 1),
            SortDirection::Ascending,
        );
        assert_eq!(asc[0].carrier_code, "KE");
    }

    #[test]
    fn trend_includes_expired_records_and_buckets_by_start_month() {
        let rates = CurrencyRates::default();
        let records = vec![
            record("KE", Currency::Krw, Some(100.0), ymd(2024, 11, 1), ymd(2024, 11, 30)),
            record("KE", Currency::Krw, Some(200.0), ymd(2024, 11, 15), ymd(2024, 11, 30)),
            record("KE", Currency::Krw, Some(400.0), ymd(2024, 12, 1), far(2099)),
        ];
        let points = monthly_trend(&records, Some("KE"), SurchargeType::Fuel, &rates);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].month, "2024-11");
        assert_eq!(points[0].average, 150.0);
        assert_eq!(points[0].min, 100.0);
        assert_eq!(points[0].max, 200.0);
        assert_eq!(points[0].sample_count, 2);
        assert_eq!(points[1].month, "2024-12");
    }

    #[test]
    fn trend_keeps_only_the_last_twelve_months() {
        let rates = CurrencyRates::default();
        let mut records = Vec::new();
        for i in 0..15u32 {
            let (y, m) = (2024 + (i / 12) as i32, i % 12 + 1);
            records.push(record(
                "KE",
                Currency::Krw,
                Some(100.0 + f64::from(i)),
                ymd(y, m, 1),
                far(2099),
            ));
        }
        let points = monthly_trend(&records, None, SurchargeType::Fuel, &rates);
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].month, "2024-04");
        assert_eq!(points[11].month, "2025-03");
    }

    #[test]
    fn percent_change_needs_two_months() {
        let rates = CurrencyRates::default();
        let one = monthly_trend(
            &[record("KE", Currency::Krw, Some(100.0), ymd(2025, 1, 1), far(2099))],
            None,
            SurchargeType::Fuel,
            &rates,
        );
        assert_eq!(percent_change(&one), None);

        let two = vec![
            MonthlyPoint {
                month: "2025-01".into(),
                average: 100.0,
                min: 100.0,
                max: 100.0,
                sample_count: 1,
            },
            MonthlyPoint {
                month: "2025-02".into(),
                average: 150.0,
                min: 150.0,
                max: 150.0,
                sample_count: 1,
            },
        ];
        assert_eq!(percent_change(&two), Some(50.0));
    }
}
