//! Market data provider interface.

use crate::error::ProviderError;
use crate::models::market::PriceSeries;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait PriceSeriesProvider {
    /// Daily adjusted bars for `ticker` covering the last `lookback_days`
    /// calendar days. An empty series means the provider had no data.
    async fn fetch(&self, ticker: &str, lookback_days: u32) -> Result<PriceSeries, ProviderError>;
}

/// Provider serving fixed series from memory; unknown tickers yield an
/// empty series.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSeriesProvider {
    series: HashMap<String, PriceSeries>,
}

impl StaticPriceSeriesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, ticker: &str, series: PriceSeries) -> Self {
        self.series.insert(ticker.to_uppercase(), series);
        self
    }
}

#[async_trait]
impl PriceSeriesProvider for StaticPriceSeriesProvider {
    async fn fetch(&self, ticker: &str, _lookback_days: u32) -> Result<PriceSeries, ProviderError> {
        Ok(self
            .series
            .get(&ticker.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }
}
