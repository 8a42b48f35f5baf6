use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One raw put contract as the provider reports it, before an expiry date
/// has been attached. The four metadata fields (contract symbol, size,
/// currency, last trade time) only live until enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutQuote {
    pub contract_symbol: String,
    pub contract_size: Option<String>,
    pub currency: Option<String>,
    pub last_trade_date: Option<DateTime<Utc>>,
    pub strike: f64,
    pub last_price: f64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: u64,
    pub implied_volatility: Option<f64>,
    pub in_the_money: bool,
}

/// Market data capabilities the pipeline consumes. Every call is a blocking
/// fetch from the pipeline's point of view; a failure aborts the run.
#[async_trait]
pub trait MarketData {
    /// Latest close price for the underlying.
    async fn latest_close_price(&self, symbol: &str) -> Result<f64>;

    /// Available option expiry dates for the underlying, in no particular order.
    async fn expiry_dates(&self, symbol: &str) -> Result<Vec<NaiveDate>>;

    /// Raw put contracts for one expiry date, in provider order.
    async fn put_contracts(&self, symbol: &str, expiry: NaiveDate) -> Result<Vec<PutQuote>>;
}
