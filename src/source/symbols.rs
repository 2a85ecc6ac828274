/// Symbol mapping helpers.
///
/// Canonical pair (used internally): `TradingPair { base: "USDT", quote: "NGN" }`
///
/// Source mappings:
/// - Binance:   "USDTNGN"
/// - Luno:      "USDTNGN" (Luno prefers XBT for BTC)
/// - Quidax:    "usdtngn"
/// - CoinGecko: coin id "tether", currency "ngn"
use super::types::TradingPair;

pub fn to_binance_symbol(pair: &TradingPair) -> String {
    format!("{}{}", pair.base, pair.quote).to_uppercase()
}

pub fn to_luno_pair(pair: &TradingPair) -> String {
    let base = match pair.base.to_uppercase().as_str() {
        "BTC" => "XBT".to_string(),
        other => other.to_string(),
    };
    format!("{}{}", base, pair.quote.to_uppercase())
}

pub fn to_quidax_market(pair: &TradingPair) -> String {
    format!("{}{}", pair.base, pair.quote).to_lowercase()
}

pub fn to_coingecko_id(base: &str) -> String {
    match base.to_uppercase().as_str() {
        "USDT" => "tether".to_string(),
        "BTC" => "bitcoin".to_string(),
        "ETH" => "ethereum".to_string(),
        "BNB" => "binancecoin".to_string(),
        _ => base.to_lowercase(),
    }
}

pub fn to_coingecko_currency(quote: &str) -> String {
    quote.to_lowercase()
}
