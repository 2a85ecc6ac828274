//! Fallback-chain rate fetcher
//!
//! Sources are tried strictly in order, one request each. The first strictly
//! positive price wins; everything else is logged and skipped. Exhausting the
//! chain is reported through `RateQuote::status`, never as an error.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::constants::events;
use crate::error::SourceError;
use crate::source::factory::build_sources;
use crate::source::traits::{RateSource, SourceResult};
use crate::source::types::{RateQuote, TradingPair};

pub struct RateFetcher {
    sources: Vec<Arc<dyn RateSource>>,
    pair: TradingPair,
}

impl RateFetcher {
    pub fn new(sources: Vec<Arc<dyn RateSource>>, pair: TradingPair) -> Self {
        Self { sources, pair }
    }

    pub fn from_config(config: &AppConfig) -> SourceResult<Self> {
        Ok(Self::new(build_sources(config)?, config.pair.clone()))
    }

    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn fetch(&self) -> RateQuote {
        for (idx, source) in self.sources.iter().enumerate() {
            info!(
                event = events::SOURCE_ATTEMPT,
                source = source.name(),
                position = idx + 1,
                "📡 Fetching {} from {}...",
                self.pair,
                source.name()
            );

            match self.attempt(source.as_ref()).await {
                Ok(price) => {
                    info!(
                        event = events::SOURCE_SUCCEEDED,
                        source = source.name(),
                        price,
                        "✅ {} rate from {}: {}",
                        self.pair,
                        source.name(),
                        price
                    );
                    return RateQuote::success(source.name(), &self.pair, price);
                }
                Err(e) => {
                    warn!(
                        event = events::SOURCE_FAILED,
                        source = source.name(),
                        "⚠️ {} failed: {}",
                        source.name(),
                        e
                    );
                }
            }
        }

        error!(
            event = events::CHAIN_EXHAUSTED,
            attempted = self.sources.len(),
            "❌ All rate sources failed for {}",
            self.pair
        );
        RateQuote::failed(&self.pair)
    }

    async fn attempt(&self, source: &dyn RateSource) -> SourceResult<f64> {
        let price = source.fetch_price(&self.pair).await?;
        if price.is_finite() && price > 0.0 {
            Ok(price)
        } else {
            Err(SourceError::NonPositivePrice {
                source_name: source.name().to_string(),
                price,
            })
        }
    }
}
