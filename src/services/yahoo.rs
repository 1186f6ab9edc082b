//! Yahoo Finance chart API provider for daily equity bars.

use crate::error::ProviderError;
use crate::models::market::{Bar, PriceSeries};
use crate::services::market_data::PriceSeriesProvider;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<Quote>,
    #[serde(default)]
    adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    adjclose: Option<Vec<Option<f64>>>,
}

/// Yahoo uses hyphens instead of dots for share classes (BRK-B, not BRK.B).
fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase().replace('.', "-")
}

fn column<T: Copy>(values: &Option<Vec<Option<T>>>, i: usize) -> Option<T> {
    values.as_ref().and_then(|v| v.get(i).copied().flatten())
}

pub struct YahooFinanceProvider {
    client: Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36")
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn parse_series(ticker: &str, response: ChartResponse) -> Result<PriceSeries, ProviderError> {
        if let Some(error) = response.chart.error {
            return Err(ProviderError::Api {
                code: error.code,
                description: error.description,
            });
        }

        let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
            return Ok(PriceSeries::empty());
        };
        let Some(timestamps) = result.timestamp else {
            return Ok(PriceSeries::empty());
        };
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Parse(format!("no quote data for {}", ticker)))?;
        let adjclose = result
            .indicators
            .adjclose
            .and_then(|a| a.into_iter().next())
            .and_then(|a| a.adjclose);

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &timestamp) in timestamps.iter().enumerate() {
            let Some(close) = column(&quote.close, i).filter(|c| c.is_finite()) else {
                continue;
            };
            let Some(date) = DateTime::from_timestamp(timestamp, 0).map(|t| t.date_naive()) else {
                continue;
            };

            // Scale the whole bar by the split/dividend adjustment factor.
            let factor = column(&adjclose, i)
                .filter(|adj| adj.is_finite() && close != 0.0)
                .map(|adj| adj / close)
                .unwrap_or(1.0);

            let mut bar = Bar::new(
                date,
                column(&quote.open, i).unwrap_or(close) * factor,
                column(&quote.high, i).unwrap_or(close) * factor,
                column(&quote.low, i).unwrap_or(close) * factor,
                close * factor,
            );
            if let Some(volume) = column(&quote.volume, i) {
                bar = bar.with_volume(volume);
            }
            bars.push(bar);
        }

        Ok(PriceSeries::from_bars(bars))
    }
}

#[async_trait]
impl PriceSeriesProvider for YahooFinanceProvider {
    async fn fetch(&self, ticker: &str, lookback_days: u32) -> Result<PriceSeries, ProviderError> {
        let symbol = normalize_symbol(ticker);
        let now = Utc::now();
        let start = now - ChronoDuration::days(i64::from(lookback_days));
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        debug!(ticker = %symbol, lookback_days, "Fetching Yahoo Finance chart: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", start.timestamp().to_string()),
                ("period2", now.timestamp().to_string()),
                ("interval", "1d".to_string()),
                ("events", "div|split".to_string()),
                ("includePrePost", "false".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NoData(symbol));
        }
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ChartResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;
        let series = Self::parse_series(&symbol, parsed)?;

        debug!(ticker = %symbol, bars = series.len(), "Fetched {} bars for {}", series.len(), symbol);
        Ok(series)
    }
}
