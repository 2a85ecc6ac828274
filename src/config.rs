use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tracing::warn;
use url::Url;

use crate::constants;
use crate::error::ConfigError;
use crate::source::types::TradingPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Binance,
    Coingecko,
    Luno,
    Quidax,
}

impl SourceKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            SourceKind::Binance => "Binance",
            SourceKind::Coingecko => "CoinGecko",
            SourceKind::Luno => "Luno",
            SourceKind::Quidax => "Quidax",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            SourceKind::Binance => constants::sources::BINANCE_BASE_URL,
            SourceKind::Coingecko => constants::sources::COINGECKO_BASE_URL,
            SourceKind::Luno => constants::sources::LUNO_BASE_URL,
            SourceKind::Quidax => constants::sources::QUIDAX_BASE_URL,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub name: Option<String>,
    pub base_url: Option<String>,
}

impl SourceConfig {
    pub fn new(kind: SourceKind) -> Self {
        Self { kind, name: None, base_url: None }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.kind.default_name().to_string())
    }

    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(self.kind.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

/// Signal table cut-offs, in quote currency per base unit
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub bearish_above: f64,
    pub bullish_below: f64,
    pub confidence: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bearish_above: constants::signal::BEARISH_ABOVE,
            bullish_below: constants::signal::BULLISH_BELOW,
            confidence: constants::signal::CONFIDENCE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub pair: TradingPair,
    pub request_timeout_secs: u64,
    pub thresholds: Thresholds,
    pub output: OutputFormat,

    /// Tried in order; the first source returning a positive price wins
    pub sources: Vec<SourceConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pair: TradingPair::default(),
            request_timeout_secs: constants::sources::DEFAULT_TIMEOUT.as_secs(),
            thresholds: Thresholds::default(),
            output: OutputFormat::default(),
            sources: vec![
                SourceConfig::new(SourceKind::Binance),
                SourceConfig::new(SourceKind::Coingecko),
            ],
        }
    }
}

impl AppConfig {
    /// Load from the path in `TRACKER_CONFIG`, or `tracker.yaml`.
    ///
    /// Never fails: a missing file means defaults, and an unreadable or
    /// invalid one is logged and replaced by the defaults.
    pub fn load_or_default() -> Self {
        Self::load_from_or_default(Self::config_path())
    }

    pub fn load_from_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("⚠️ {} ({}) - falling back to built-in defaults", e, path.display());
                Self::default()
            }
        }
    }

    fn config_path() -> String {
        std::env::var(constants::config::CONFIG_PATH_ENV)
            .unwrap_or_else(|_| constants::config::DEFAULT_CONFIG_PATH.to_string())
    }

    /// A missing file is not an error: the built-in defaults are returned.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair.base.trim().is_empty() || self.pair.quote.trim().is_empty() {
            return Err(ConfigError::Invalid("pair base and quote must be set".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be positive".into()));
        }

        let t = &self.thresholds;
        if !(t.bullish_below.is_finite() && t.bearish_above.is_finite()) {
            return Err(ConfigError::Invalid("thresholds must be finite".into()));
        }
        if t.bullish_below > t.bearish_above {
            return Err(ConfigError::Invalid(format!(
                "bullish_below ({}) exceeds bearish_above ({})",
                t.bullish_below, t.bearish_above
            )));
        }
        if !(0.0..=1.0).contains(&t.confidence) {
            return Err(ConfigError::Invalid(format!(
                "confidence {} outside [0, 1]",
                t.confidence
            )));
        }

        if self.sources.is_empty() {
            return Err(ConfigError::Invalid("at least one source is required".into()));
        }
        for source in &self.sources {
            let base_url = source.effective_base_url();
            let invalid = |reason: String| {
                ConfigError::Invalid(format!(
                    "source {} has invalid base_url '{}': {}",
                    source.display_name(),
                    base_url,
                    reason
                ))
            };
            let parsed = Url::parse(&base_url).map_err(|e| invalid(e.to_string()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
            }
            if parsed.host_str().is_none() {
                return Err(invalid("missing host".to_string()));
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
