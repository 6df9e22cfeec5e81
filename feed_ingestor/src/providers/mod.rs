//! Provider abstraction for surcharge feed sources.
//!
//! This module defines the [`FeedProvider`] trait, a unified interface for
//! fetching one surcharge type's raw tabular rows for a given effective date.
//! The concrete vendor implementation lives in [`tariff_rest`]; tests swap in
//! canned in-memory providers via `dyn FeedProvider`.
//!
//! Providers return raw [`RawCell`] rows, not records: normalization is a
//! separate, pure step (see [`crate::normalize`]) so it can be tested without
//! any network or workbook machinery.

pub mod errors;
pub mod tariff_rest;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{cell::RawCell, record::SurchargeType};
pub use errors::{ProviderError, ProviderInitError};
pub use tariff_rest::TariffRestProvider;

/// A source of raw surcharge rows for one (type, effective date) pair.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Fetches the raw data rows (header row already stripped) for
    /// `surcharge_type` effective at `effective_date`.
    ///
    /// "No data published for that date" is `Ok(vec![])`, not an error;
    /// errors are reserved for transport-level failures the caller may want
    /// to log before degrading to an empty result.
    async fn fetch_rows(
        &self,
        surcharge_type: SurchargeType,
        effective_date: NaiveDate,
    ) -> Result<Vec<Vec<RawCell>>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyProvider;

    #[async_trait]
    impl FeedProvider for EmptyProvider {
        async fn fetch_rows(
            &self,
            _surcharge_type: SurchargeType,
            _effective_date: NaiveDate,
        ) -> Result<Vec<Vec<RawCell>>, ProviderError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn providers_work_through_dyn_dispatch() {
        let provider: Box<dyn FeedProvider> = Box::new(EmptyProvider);
        let rows = provider
            .fetch_rows(
                SurchargeType::Fuel,
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
