use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::{AppConfig, SourceKind};
use crate::error::SourceError;

use super::{
    binance::BinanceTicker,
    coingecko::CoinGeckoPrice,
    luno::LunoTicker,
    quidax::QuidaxTicker,
    traits::{RateSource, SourceResult},
};

/// One client for the whole chain; the timeout bounds every single request.
pub fn build_client(timeout: Duration) -> SourceResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("naira-rate-tracker/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SourceError::Client(e.to_string()))
}

pub fn build_sources(config: &AppConfig) -> SourceResult<Vec<Arc<dyn RateSource>>> {
    let client = build_client(config.request_timeout())?;

    let sources = config
        .sources
        .iter()
        .map(|sc| {
            let name = sc.display_name();
            let base_url = sc.effective_base_url();
            let client = client.clone();
            let source: Arc<dyn RateSource> = match sc.kind {
                SourceKind::Binance => Arc::new(BinanceTicker::new(client, base_url, name)),
                SourceKind::Coingecko => Arc::new(CoinGeckoPrice::new(client, base_url, name)),
                SourceKind::Luno => Arc::new(LunoTicker::new(client, base_url, name)),
                SourceKind::Quidax => Arc::new(QuidaxTicker::new(client, base_url, name)),
            };
            source
        })
        .collect();

    Ok(sources)
}
