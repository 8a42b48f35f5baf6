use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::providers::PutQuote;

/// A raw put contract tagged with the expiry date it was fetched under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutContract {
    pub expiry_date: NaiveDate,
    pub quote: PutQuote,
}

/// Final record schema. Field declaration order is the rendered column
/// order: the derived distance/percent columns sit between lastPrice and
/// bid, value comes last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutRow {
    pub index: usize,
    pub expiry_date: NaiveDate,
    pub strike: f64,
    pub last_price: f64,
    pub distance_otm: f64,
    pub percent_otm: f64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: u64,
    pub implied_volatility: Option<f64>,
    pub in_the_money: bool,
    pub value: f64,
}
