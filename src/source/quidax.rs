//! Quidax public market ticker (Nigerian exchange).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{
    http::{get_json, parse_price},
    symbols::to_quidax_market,
    traits::{RateSource, SourceResult},
    types::TradingPair,
};
use crate::error::SourceError;

#[derive(Clone)]
pub struct QuidaxTicker {
    client: Client,
    base_url: String,
    name: String,
}

impl QuidaxTicker {
    pub fn new(client: Client, base_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            name: name.into(),
        }
    }

    /// `{"status": "success", "data": {"market": "usdtngn", "ticker": {"last": "1702.5", ...}}}`
    pub fn parse_ticker(name: &str, body: &Value) -> SourceResult<f64> {
        let ticker = body
            .get("data")
            .and_then(|d| d.get("ticker"))
            .ok_or_else(|| SourceError::MissingField {
                source_name: name.to_string(),
                field: "data.ticker".to_string(),
            })?;
        parse_price(name, "data.ticker.last", ticker.get("last"))
    }
}

#[async_trait]
impl RateSource for QuidaxTicker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_price(&self, pair: &TradingPair) -> SourceResult<f64> {
        let endpoint = format!(
            "{}/api/v1/markets/tickers/{}",
            self.base_url,
            to_quidax_market(pair)
        );
        let body = get_json(self.client.get(&endpoint)).await?;
        Self::parse_ticker(&self.name, &body)
    }
}
