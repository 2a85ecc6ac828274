//! Application-wide constants
//!
//! Defaults for the rate chain and the signal table live here so the config
//! layer and the tests agree on the same numbers.

use std::time::Duration;

/// Rate source defaults
pub mod sources {
    use super::*;

    /// Per-request timeout applied to every source
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub const BINANCE_BASE_URL: &str = "https://api.binance.com";
    pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";
    pub const LUNO_BASE_URL: &str = "https://api.luno.com";
    pub const QUIDAX_BASE_URL: &str = "https://www.quidax.com";

    /// Name reported when every source in the chain failed
    pub const NO_SOURCE: &str = "none";

    /// Upper bound on how much of an error body ends up in logs
    pub const MAX_ERROR_BODY_CHARS: usize = 200;
}

/// Trading pair defaults
pub mod pair {
    pub const DEFAULT_BASE: &str = "USDT";
    pub const DEFAULT_QUOTE: &str = "NGN";
}

/// Signal classifier thresholds (NGN per USDT)
pub mod signal {
    /// Above this the naira is considered weak
    pub const BEARISH_ABOVE: f64 = 1750.0;

    /// Below this the naira is considered strong
    pub const BULLISH_BELOW: f64 = 1650.0;

    pub const CONFIDENCE: f64 = 0.85;
}

/// Config file lookup
pub mod config {
    pub const CONFIG_PATH_ENV: &str = "TRACKER_CONFIG";
    pub const DEFAULT_CONFIG_PATH: &str = "tracker.yaml";
}

/// Logging event names for structured logging
pub mod events {
    pub const SOURCE_ATTEMPT: &str = "source_attempt";
    pub const SOURCE_SUCCEEDED: &str = "source_succeeded";
    pub const SOURCE_FAILED: &str = "source_failed";
    pub const CHAIN_EXHAUSTED: &str = "chain_exhausted";
}
