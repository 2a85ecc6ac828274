pub mod factory;
pub mod http;
pub mod traits;
pub mod types;

pub mod symbols;

pub mod binance;
pub mod coingecko;
pub mod luno;
pub mod quidax;
