use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants;

fn uppercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_uppercase())
}

/// Canonical pair, rendered as "BASE/QUOTE" (e.g. "USDT/NGN")
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    #[serde(deserialize_with = "uppercase")]
    pub base: String,
    #[serde(deserialize_with = "uppercase")]
    pub quote: String,
}

impl TradingPair {
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.trim().to_uppercase(),
            quote: quote.trim().to_uppercase(),
        }
    }
}

impl Default for TradingPair {
    fn default() -> Self {
        Self::new(constants::pair::DEFAULT_BASE, constants::pair::DEFAULT_QUOTE)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Success,
    Failed,
}

/// Outcome of one pass over the source chain
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateQuote {
    pub source: String,
    pub symbol: String,
    pub price: f64,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub status: FetchStatus,
}

impl RateQuote {
    pub fn success(source: impl Into<String>, pair: &TradingPair, price: f64) -> Self {
        Self {
            source: source.into(),
            symbol: pair.to_string(),
            price,
            timestamp: Utc::now().to_rfc3339(),
            status: FetchStatus::Success,
        }
    }

    /// Terminal result when every source failed: price 0, no source.
    pub fn failed(pair: &TradingPair) -> Self {
        Self {
            source: constants::sources::NO_SOURCE.to_string(),
            symbol: pair.to_string(),
            price: 0.0,
            timestamp: Utc::now().to_rfc3339(),
            status: FetchStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }
}
