use async_trait::async_trait;

use crate::error::SourceError;

use super::types::TradingPair;

pub type SourceResult<T> = Result<T, SourceError>;

/// A public price endpoint that can quote a trading pair.
///
/// Implementations make exactly one request per call and return the raw parsed
/// price; deciding whether that price is usable is left to the fetcher.
#[async_trait]
pub trait RateSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_price(&self, pair: &TradingPair) -> SourceResult<f64>;
}
