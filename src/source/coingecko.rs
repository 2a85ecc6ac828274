//! CoinGecko simple price endpoint, used as the fallback source.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{
    http::{get_json, parse_price},
    symbols::{to_coingecko_currency, to_coingecko_id},
    traits::{RateSource, SourceResult},
    types::TradingPair,
};
use crate::error::SourceError;

#[derive(Clone)]
pub struct CoinGeckoPrice {
    client: Client,
    base_url: String,
    name: String,
}

impl CoinGeckoPrice {
    pub fn new(client: Client, base_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            name: name.into(),
        }
    }

    /// `{"tether": {"ngn": 1650.12}}`
    pub fn parse_simple_price(
        name: &str,
        body: &Value,
        coin_id: &str,
        currency: &str,
    ) -> SourceResult<f64> {
        let coin = body.get(coin_id).ok_or_else(|| SourceError::MissingField {
            source_name: name.to_string(),
            field: coin_id.to_string(),
        })?;
        parse_price(name, &format!("{}.{}", coin_id, currency), coin.get(currency))
    }
}

#[async_trait]
impl RateSource for CoinGeckoPrice {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_price(&self, pair: &TradingPair) -> SourceResult<f64> {
        let endpoint = format!("{}/api/v3/simple/price", self.base_url);
        let coin_id = to_coingecko_id(&pair.base);
        let currency = to_coingecko_currency(&pair.quote);
        let request = self.client.get(&endpoint).query(&[
            ("ids", coin_id.as_str()),
            ("vs_currencies", currency.as_str()),
        ]);
        let body = get_json(request).await?;
        Self::parse_simple_price(&self.name, &body, &coin_id, &currency)
    }
}
