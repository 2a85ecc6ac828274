//! Binance spot ticker (public, unauthenticated).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{
    http::{get_json, parse_price},
    symbols::to_binance_symbol,
    traits::{RateSource, SourceResult},
    types::TradingPair,
};

#[derive(Clone)]
pub struct BinanceTicker {
    client: Client,
    base_url: String,
    name: String,
}

impl BinanceTicker {
    pub fn new(client: Client, base_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            name: name.into(),
        }
    }

    /// `{"symbol": "USDTNGN", "price": "1650.00000000"}`
    pub fn parse_ticker(name: &str, body: &Value) -> SourceResult<f64> {
        parse_price(name, "price", body.get("price"))
    }
}

#[async_trait]
impl RateSource for BinanceTicker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_price(&self, pair: &TradingPair) -> SourceResult<f64> {
        let endpoint = format!("{}/api/v3/ticker/price", self.base_url);
        let symbol = to_binance_symbol(pair);
        let body = get_json(self.client.get(&endpoint).query(&[("symbol", symbol.as_str())])).await?;
        Self::parse_ticker(&self.name, &body)
    }
}
