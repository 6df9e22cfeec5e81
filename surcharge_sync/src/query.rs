//! As-of temporal queries over an in-memory record snapshot.
//!
//! Pure read-only filtering: the caller loads a snapshot (e.g. via
//! [`crate::store::repo::select_all`]) and these functions never mutate it,
//! so they are safe to run concurrently from any number of query contexts.

use chrono::NaiveDate;
use feed_ingestor::models::record::{SurchargeRecord, SurchargeType};

use crate::carriers;

/// Optional filters layered on top of the as-of validity predicate.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Keep only these carrier codes; empty means no carrier filter.
    pub carrier_codes: Vec<String>,
    /// Keep only this surcharge type, when set.
    pub surcharge_type: Option<SurchargeType>,
    /// Case-insensitive substring match against the carrier code or its
    /// display name from the static lookup.
    pub text: Option<String>,
}

/// Returns the records whose `[start_date, end_date]` interval (inclusive on
/// both ends) contains `as_of`, after applying `filter`. Ordered by start
/// date descending, most recent first.
pub fn query_as_of<'a>(
    records: &'a [SurchargeRecord],
    as_of: NaiveDate,
    filter: &RecordFilter,
) -> Vec<&'a SurchargeRecord> {
    let text = filter
        .text
        .as_deref()
        .map(str::to_lowercase)
        .filter(|t| !t.is_empty());

    let mut hits: Vec<&SurchargeRecord> = records
        .iter()
        .filter(|r| r.start_date <= as_of && as_of <= r.end_date)
        .filter(|r| {
            filter
                .surcharge_type
                .is_none_or(|t| r.surcharge_type == t)
        })
        .filter(|r| {
            filter.carrier_codes.is_empty()
                || filter.carrier_codes.iter().any(|c| c == &r.carrier_code)
        })
        .filter(|r| text.as_deref().is_none_or(|q| matches_text(r, q)))
        .collect();

    hits.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    hits
}

fn matches_text(record: &SurchargeRecord, query_lower: &str) -> bool {
    if record.carrier_code.to_lowercase().contains(query_lower) {
        return true;
    }
    carriers::carrier_name(&record.carrier_code)
        .is_some_and(|name| name.to_lowercase().contains(query_lower))
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
        surcharge_type: SurchargeType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SurchargeRecord {
        SurchargeRecord {
            surcharge_type,
            carrier_code: carrier.to_string(),
            carrier_name: None,
            start_date: start,
            end_date: end,
            currency: Currency::Krw,
            min_charge: None,
            over_charge: Some(100.0),
            route: "ICN-LAX".to_string(),
            remark: None,
            charge_code: surcharge_type.code().to_string(),
        }
    }

    fn q1_record() -> SurchargeRecord {
        record(
            "KE",
            SurchargeType::Fuel,
            ymd(2025, 1, 1),
            ymd(2025, 3, 31),
        )
    }

    #[test]
    fn interval_containment_is_inclusive_on_both_ends() {
        let records = vec![q1_record()];
        let filter = RecordFilter::default();

        for day in [
            ymd(2025, 1, 1),
            ymd(2025, 2, 15),
            ymd(2025, 3, 31),
        ] {
            assert_eq!(query_as_of(&records, day, &filter).len(), 1, "{day}");
        }
        assert!(query_as_of(&records, ymd(2024, 12, 31), &filter).is_empty());
        assert!(query_as_of(&records, ymd(2025, 4, 1), &filter).is_empty());
    }

    #[test]
    fn carrier_and_type_filters_compose() {
        let records = vec![
            q1_record(),
            record(
                "OZ",
                SurchargeType::Security,
                ymd(2025, 1, 1),
                ymd(2025, 3, 31),
            ),
        ];

        let filter = RecordFilter {
            carrier_codes: vec!["OZ".to_string()],
            ..Default::default()
        };
        let hits = query_as_of(&records, ymd(2025, 2, 1), &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].carrier_code, "OZ");

        let filter = RecordFilter {
            surcharge_type: Some(SurchargeType::Fuel),
            ..Default::default()
        };
        let hits = query_as_of(&records, ymd(2025, 2, 1), &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].carrier_code, "KE");
    }

    #[test]
    fn text_filter_matches_code_and_display_name() {
        let records = vec![q1_record()];
        let hit = |needle: &str| {
            let filter = RecordFilter {
                text: Some(needle.to_string()),
                ..Default::default()
            };
            query_as_of(&records, ymd(2025, 2, 1), &filter).len()
        };

        assert_eq!(hit("ke"), 1);
        assert_eq!(hit("korean"), 1); // via the static lookup, not the record
        assert_eq!(hit("asiana"), 0);
    }

    #[test]
    fn results_are_most_recent_first() {
        let records = vec![
            record("KE", SurchargeType::Fuel, ymd(2025, 1, 1), ymd(2025, 12, 31)),
            record("KE", SurchargeType::Fuel, ymd(2025, 3, 1), ymd(2025, 12, 31)),
        ];
        let hits = query_as_of(&records, ymd(2025, 6, 1), &RecordFilter::default());
        assert_eq!(hits[0].start_date, ymd(2025, 3, 1));
        assert_eq!(hits[1].start_date, ymd(2025, 1, 1));
    }
}
