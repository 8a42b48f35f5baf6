use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::providers::PutQuote;

/// Response envelope of the v8 chart endpoint, trimmed to the metadata the
/// screener needs for the spot price.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Vec<ChartResult>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub chart_previous_close: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
}

impl ChartMeta {
    /// Latest close: the live regular-market price while the session is
    /// open, otherwise the previous close the chart reports.
    pub fn latest_close(&self) -> Option<f64> {
        self.regular_market_price
            .or(self.chart_previous_close)
            .or(self.previous_close)
    }
}

/// Response envelope of the v7 options endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsResponse {
    #[serde(rename = "optionChain")]
    pub option_chain: OptionChain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionChain {
    #[serde(default)]
    pub result: Vec<OptionChainResult>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainResult {
    pub underlying_symbol: String,
    #[serde(default)]
    pub expiration_dates: Vec<i64>, // Unix timestamps, midnight UTC
    #[serde(default)]
    pub strikes: Vec<f64>,
    #[serde(default)]
    pub options: Vec<OptionPeriod>,
}

/// Contracts for a single expiry date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPeriod {
    pub expiration_date: i64,
    #[serde(default)]
    pub calls: Vec<YahooOptionQuote>,
    #[serde(default)]
    pub puts: Vec<YahooOptionQuote>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooOptionQuote {
    pub contract_symbol: String,
    pub strike: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub last_price: f64,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub open_interest: Option<u64>, // omitted by Yahoo when zero
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
    #[serde(default)]
    pub contract_size: Option<String>,
    #[serde(default)]
    pub last_trade_date: Option<i64>, // Unix timestamp in seconds
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub in_the_money: bool,
}

impl YahooOptionQuote {
    pub fn to_quote(&self) -> PutQuote {
        let last_trade_date = self
            .last_trade_date
            .and_then(|ts| DateTime::from_timestamp(ts, 0));

        PutQuote {
            contract_symbol: self.contract_symbol.clone(),
            contract_size: self.contract_size.clone(),
            currency: self.currency.clone(),
            last_trade_date,
            strike: self.strike,
            last_price: self.last_price,
            bid: self.bid,
            ask: self.ask,
            change: self.change,
            percent_change: self.percent_change,
            volume: self.volume,
            open_interest: self.open_interest.unwrap_or(0),
            implied_volatility: self.implied_volatility,
            in_the_money: self.in_the_money,
        }
    }
}

/// Expiration timestamps are midnight UTC, so they convert to calendar
/// dates and back without loss.
pub fn expiry_from_timestamp(ts: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

pub fn expiry_to_timestamp(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_quote_and_converts() {
        let json = r#"{
            "contractSymbol": "AAPL240119P00090000",
            "strike": 90.0,
            "currency": "USD",
            "lastPrice": 1.5,
            "change": -0.12,
            "percentChange": -7.4,
            "volume": 10,
            "openInterest": 250,
            "bid": 1.45,
            "ask": 1.55,
            "contractSize": "REGULAR",
            "expiration": 1705622400,
            "lastTradeDate": 1705081337,
            "impliedVolatility": 0.41,
            "inTheMoney": false
        }"#;

        let raw: YahooOptionQuote = serde_json::from_str(json).unwrap();
        let quote = raw.to_quote();

        assert_eq!(quote.contract_symbol, "AAPL240119P00090000");
        assert_eq!(quote.strike, 90.0);
        assert_eq!(quote.open_interest, 250);
        assert_eq!(quote.bid, Some(1.45));
        assert!(!quote.in_the_money);
        assert!(quote.last_trade_date.is_some());
    }

    #[test]
    fn missing_optionals_default() {
        let json = r#"{
            "contractSymbol": "AAPL240119P00050000",
            "strike": 50.0,
            "lastPrice": 0.02,
            "inTheMoney": false
        }"#;

        let raw: YahooOptionQuote = serde_json::from_str(json).unwrap();
        let quote = raw.to_quote();

        assert_eq!(quote.open_interest, 0);
        assert_eq!(quote.volume, None);
        assert_eq!(quote.bid, None);
        assert_eq!(quote.currency, None);
    }

    #[test]
    fn expiry_timestamps_round_trip() {
        // 2024-01-19 00:00:00 UTC
        let ts = 1705622400;
        let date = expiry_from_timestamp(ts).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 19).unwrap());
        assert_eq!(expiry_to_timestamp(date), ts);
    }

    #[test]
    fn parses_chain_envelope() {
        let json = r#"{
            "optionChain": {
                "result": [{
                    "underlyingSymbol": "AAPL",
                    "expirationDates": [1705622400, 1706227200],
                    "strikes": [90.0, 95.0],
                    "options": [{
                        "expirationDate": 1705622400,
                        "calls": [],
                        "puts": [{
                            "contractSymbol": "AAPL240119P00090000",
                            "strike": 90.0,
                            "lastPrice": 1.5,
                            "inTheMoney": false
                        }]
                    }]
                }],
                "error": null
            }
        }"#;

        let resp: OptionsResponse = serde_json::from_str(json).unwrap();
        let result = &resp.option_chain.result[0];
        assert_eq!(result.expiration_dates.len(), 2);
        assert_eq!(result.options[0].puts.len(), 1);
    }

    #[test]
    fn chart_meta_prefers_live_price() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "AAPL",
                        "regularMarketPrice": 187.44,
                        "chartPreviousClose": 185.92
                    }
                }],
                "error": null
            }
        }"#;

        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let meta = &resp.chart.result[0].meta;
        assert_eq!(meta.latest_close(), Some(187.44));
    }
}
