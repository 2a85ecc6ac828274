//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;
    use crate::error::ConfigError;
    use crate::source::types::TradingPair;

    // ============= Defaults Tests =============

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.pair, TradingPair::new("USDT", "NGN"));
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.request_timeout().as_secs(), 10);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].kind, SourceKind::Binance);
        assert_eq!(config.sources[1].kind, SourceKind::Coingecko);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_thresholds_default() {
        let t = Thresholds::default();
        assert_eq!(t.bearish_above, 1750.0);
        assert_eq!(t.bullish_below, 1650.0);
        assert_eq!(t.confidence, 0.85);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("").unwrap();
        assert_eq!(config.sources.len(), 2);

        let config = AppConfig::from_yaml("\u{feff}\n  \n").unwrap();
        assert_eq!(config.request_timeout_secs, 10);
    }

    // ============= Parsing Tests =============

    #[test]
    fn test_full_config_deserialize() {
        let yaml = r#"
pair:
  base: btc
  quote: ngn
request_timeout_secs: 5
output: json
thresholds:
  bearish_above: 110000000.0
  bullish_below: 95000000.0
  confidence: 0.7
sources:
  - kind: luno
    name: Luno NG
  - kind: binance
    base_url: https://api1.binance.com/
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.pair.to_string(), "BTC/NGN");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.thresholds.confidence, 0.7);
        assert_eq!(config.sources[0].display_name(), "Luno NG");
        assert_eq!(config.sources[0].effective_base_url(), "https://api.luno.com");
        assert_eq!(config.sources[1].display_name(), "Binance");
        assert_eq!(config.sources[1].effective_base_url(), "https://api1.binance.com");
    }

    #[test]
    fn test_partial_thresholds_keep_defaults() {
        let yaml = r#"
thresholds:
  bearish_above: 1800.0
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.thresholds.bearish_above, 1800.0);
        assert_eq!(config.thresholds.bullish_below, 1650.0);
        assert_eq!(config.thresholds.confidence, 0.85);
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_bom_is_stripped() {
        let yaml = "\u{feff}request_timeout_secs: 3\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn test_unknown_source_kind_rejected() {
        let yaml = r#"
sources:
  - kind: kucoin
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_quidax_kind_parses() {
        let yaml = r#"
sources:
  - kind: quidax
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sources[0].kind, SourceKind::Quidax);
        assert_eq!(config.sources[0].display_name(), "Quidax");
        assert_eq!(config.sources[0].effective_base_url(), "https://www.quidax.com");
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        // Typo for request_timeout_secs
        let err = AppConfig::from_yaml("request_timeout: 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("request_timeout"));
    }

    #[test]
    fn test_unknown_nested_keys_rejected() {
        let yaml = r#"
thresholds:
  bearish_over: 1800.0
"#;
        assert!(matches!(AppConfig::from_yaml(yaml), Err(ConfigError::Parse(_))));

        let yaml = r#"
sources:
  - kind: binance
    url: https://api.binance.com
"#;
        assert!(matches!(AppConfig::from_yaml(yaml), Err(ConfigError::Parse(_))));
    }

    // ============= Validation Tests =============

    #[test]
    fn test_inverted_thresholds_rejected() {
        let yaml = r#"
thresholds:
  bearish_above: 1600.0
  bullish_below: 1700.0
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let mut config = AppConfig::default();
        config.thresholds.confidence = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = AppConfig::from_yaml("request_timeout_secs: 0\n").unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn test_empty_source_list_rejected() {
        let err = AppConfig::from_yaml("sources: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let yaml = r#"
sources:
  - kind: coingecko
    base_url: "not a url"
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("CoinGecko"));
    }

    #[test]
    fn test_non_http_base_urls_rejected() {
        for base_url in ["localhost:8080", "ftp://example.com", "file:///tmp/rates"] {
            let mut config = AppConfig::default();
            config.sources[0].base_url = Some(base_url.to_string());
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} accepted", base_url);
            assert!(err.to_string().contains("unsupported scheme"), "{}: {}", base_url, err);
        }
    }

    #[test]
    fn test_http_and_https_base_urls_accepted() {
        for base_url in ["http://127.0.0.1:8080", "https://api.binance.com/"] {
            let mut config = AppConfig::default();
            config.sources[0].base_url = Some(base_url.to_string());
            assert!(config.validate().is_ok(), "{} rejected", base_url);
        }
    }

    // ============= File Loading Tests =============

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("naira-rate-tracker-does-not-exist.yaml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "naira-rate-tracker-config-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "output: json\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        // A directory exists but cannot be read as a file
        let err = AppConfig::load_from(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_or_default_recovers_from_unreadable_path() {
        let config = AppConfig::load_from_or_default(std::env::temp_dir());
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_load_or_default_recovers_from_invalid_file() {
        let path = std::env::temp_dir().join(format!(
            "naira-rate-tracker-invalid-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "request_timeout_secs: 0\noutput: json\n").unwrap();
        let config = AppConfig::load_from_or_default(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.output, OutputFormat::Text);
    }
}
