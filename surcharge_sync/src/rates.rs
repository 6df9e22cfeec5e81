//! KRW-per-unit exchange rates for the reporting currency conversion.
//!
//! Analytics functions take the rate table as an explicit parameter so they
//! stay pure and independently testable; nothing in this crate reads rates
//! from ambient state.

use feed_ingestor::models::record::Currency;
use serde::{Deserialize, Serialize};

/// Exchange rates into KRW, the reporting currency.
///
/// Each field is "KRW per one unit of that currency". KRW itself is always
/// 1.0 and has no field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    /// KRW per USD.
    pub usd: f64,
    /// KRW per EUR.
    pub eur: f64,
    /// KRW per JPY.
    pub jpy: f64,
    /// KRW per CNY.
    pub cny: f64,
}

impl CurrencyRates {
    /// KRW per one unit of `currency`.
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Krw => 1.0,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Jpy => self.jpy,
            Currency::Cny => self.cny,
        }
    }
}

impl Default for CurrencyRates {
    /// A plausible static snapshot for callers that have no live rate source.
    fn default() -> Self {
        Self {
            usd: 1450.0,
            eur: 1550.0,
            jpy: 9.5,
            cny: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn krw_is_identity() {
        let rates = CurrencyRates::default();
        assert_eq!(rates.rate(Currency::Krw), 1.0);
        assert_eq!(rates.rate(Currency::Usd), 1450.0);
    }
}
