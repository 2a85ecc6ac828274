//! Naira Rate Tracker - USDT/NGN rate fetcher and threshold signal
//!
//! Fetches the rate from an ordered chain of public sources, falling back on
//! failure, then classifies it against fixed thresholds.

pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod report;
pub mod signal;
pub mod source;

// Re-export commonly used types
pub use config::{AppConfig, Thresholds};
pub use error::{ConfigError, SourceError};
pub use fetcher::RateFetcher;
pub use signal::{classify, Action, AnalysisSignal, Sentiment};
pub use source::types::{FetchStatus, RateQuote, TradingPair};

#[cfg(test)]
mod config_tests;
