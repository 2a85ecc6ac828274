use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{
    http::{get_json, parse_price},
    symbols::to_luno_pair,
    traits::{RateSource, SourceResult},
    types::TradingPair,
};

/// Luno public ticker. Quotes the last trade on a Nigerian order book.
#[derive(Clone)]
pub struct LunoTicker {
    client: Client,
    base_url: String,
    name: String,
}

impl LunoTicker {
    pub fn new(client: Client, base_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            name: name.into(),
        }
    }

    pub fn parse_ticker(name: &str, body: &Value) -> SourceResult<f64> {
        parse_price(name, "last_trade", body.get("last_trade"))
    }
}

#[async_trait]
impl RateSource for LunoTicker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_price(&self, pair: &TradingPair) -> SourceResult<f64> {
        let endpoint = format!("{}/api/1/ticker", self.base_url);
        let luno_pair = to_luno_pair(pair);
        let body = get_json(self.client.get(&endpoint).query(&[("pair", luno_pair.as_str())])).await?;
        Self::parse_ticker(&self.name, &body)
    }
}
