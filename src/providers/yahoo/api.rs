use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpClient;
use url::Url;

use super::models::{
    expiry_from_timestamp, expiry_to_timestamp, ChartResponse, OptionsResponse,
};
use crate::config::YahooConfig;
use crate::error::{Error, Result};
use crate::providers::{MarketData, PutQuote};

pub struct YahooApi {
    http: HttpClient,
    base_url: Url,
}

impl YahooApi {
    pub fn new(config: &YahooConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let http = HttpClient::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    async fn fetch_chart(&self, symbol: &str) -> Result<ChartResponse> {
        let url = self
            .base_url
            .join(&format!("/v8/finance/chart/{}", symbol))?;

        let resp = self
            .http
            .get(url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http(format!("HTTP {}: {}", status, body)));
        }

        let data: ChartResponse = resp
            .json()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(data)
    }

    async fn fetch_options(&self, symbol: &str, date: Option<i64>) -> Result<OptionsResponse> {
        let mut url = self
            .base_url
            .join(&format!("/v7/finance/options/{}", symbol))?;

        if let Some(ts) = date {
            url.query_pairs_mut().append_pair("date", &ts.to_string());
        }

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http(format!("HTTP {}: {}", status, body)));
        }

        let data: OptionsResponse = resp
            .json()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(data)
    }
}

#[async_trait]
impl MarketData for YahooApi {
    async fn latest_close_price(&self, symbol: &str) -> Result<f64> {
        let chart = self.fetch_chart(symbol).await?;

        let meta = chart
            .chart
            .result
            .first()
            .map(|r| &r.meta)
            .ok_or_else(|| Error::DataUnavailable(format!("no chart data for {}", symbol)))?;

        meta.latest_close()
            .ok_or_else(|| Error::DataUnavailable(format!("no close price for {}", symbol)))
    }

    async fn expiry_dates(&self, symbol: &str) -> Result<Vec<NaiveDate>> {
        let resp = self.fetch_options(symbol, None).await?;

        let result = resp
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| Error::DataUnavailable(format!("no option chain for {}", symbol)))?;

        Ok(result
            .expiration_dates
            .iter()
            .filter_map(|&ts| expiry_from_timestamp(ts))
            .collect())
    }

    async fn put_contracts(&self, symbol: &str, expiry: NaiveDate) -> Result<Vec<PutQuote>> {
        let ts = expiry_to_timestamp(expiry);
        let resp = self.fetch_options(symbol, Some(ts)).await?;

        let result = resp
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| Error::DataUnavailable(format!("no option chain for {}", symbol)))?;

        let period = result
            .options
            .into_iter()
            .find(|p| p.expiration_date == ts)
            .ok_or_else(|| {
                Error::DataUnavailable(format!("no contracts for {} expiring {}", symbol, expiry))
            })?;

        Ok(period.puts.iter().map(|q| q.to_quote()).collect())
    }
}
