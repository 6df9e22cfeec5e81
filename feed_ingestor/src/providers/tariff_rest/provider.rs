use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use shared_utils::env::{get_env_var, get_env_var_parsed};
use tracing::{debug, warn};

use super::workbook::parse_workbook;
use crate::{
    models::{cell::RawCell, record::SurchargeType},
    providers::{FeedProvider, ProviderError, ProviderInitError},
};

/// Environment variable naming the vendor endpoint.
const BASE_URL_VAR: &str = "SURCHARGE_FEED_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
const TIMEOUT_VAR: &str = "SURCHARGE_FEED_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Bodies under this size cannot be a real workbook and are treated as
/// "nothing published for that date". Tunable heuristic, not a contract:
/// anything that fails workbook parsing degrades to empty as well.
const MIN_WORKBOOK_BYTES: usize = 100;

/// Fetches surcharge workbooks from the vendor's date-parameterized endpoint.
///
/// One GET per (type, date): `{base}?type=FS&date=2025-01-01`. A non-success
/// status, an implausibly small body, or an unparseable workbook all count as
/// "no data" and return zero rows; only transport failures surface as errors.
pub struct TariffRestProvider {
    client: Client,
    base_url: String,
}

impl TariffRestProvider {
    /// Creates a provider from the environment.
    ///
    /// Requires `SURCHARGE_FEED_BASE_URL`; honors `SURCHARGE_FEED_TIMEOUT_SECS`
    /// (default 10). Missing required configuration fails here, immediately,
    /// rather than on first fetch.
    pub fn new() -> Result<Self, ProviderInitError> {
        let base_url = get_env_var(BASE_URL_VAR)?;
        let timeout_secs = get_env_var_parsed(TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        Self::from_parts(base_url, Duration::from_secs(timeout_secs))
    }

    /// Creates a provider from explicit parts. Used by tests and callers that
    /// carry their own configuration.
    pub fn from_parts(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderInitError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl FeedProvider for TariffRestProvider {
    async fn fetch_rows(
        &self,
        surcharge_type: SurchargeType,
        effective_date: NaiveDate,
    ) -> Result<Vec<Vec<RawCell>>, ProviderError> {
        let date = effective_date.format("%Y-%m-%d").to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("type", surcharge_type.code()), ("date", date.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(%surcharge_type, %date, status = %response.status(), "feed returned non-success, treating as no data");
            return Ok(Vec::new());
        }

        let body = response.bytes().await?;
        if body.len() < MIN_WORKBOOK_BYTES {
            debug!(%surcharge_type, %date, bytes = body.len(), "feed body too small, treating as no data");
            return Ok(Vec::new());
        }

        match parse_workbook(&body) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!(%surcharge_type, %date, error = %e, "feed workbook unparseable, treating as no data");
                Ok(Vec::new())
            }
        }
    }
}
