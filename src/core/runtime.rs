//! One evaluation cycle over the ticker universe

use crate::error::ProviderError;
use crate::models::market::PriceSeries;
use crate::services::market_data::PriceSeriesProvider;
use crate::signals::categories::Categorizer;
use crate::signals::engine::{SignalEngine, TickerEvaluation};
use crate::signals::scoring::rank_strong_buys;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the evaluation runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tickers: Vec<String>,
    pub lookback_days: u32,
    /// Pause between consecutive provider calls.
    pub request_delay: Duration,
    /// Extra attempts after a transient provider failure.
    pub fetch_retries: usize,
    /// First backoff delay; later retries back off exponentially.
    pub retry_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tickers: Categorizer::universe(),
            lookback_days: 200,
            request_delay: Duration::from_millis(500),
            fetch_retries: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Results of one pass over the universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<TickerEvaluation>,
    /// Tickers skipped this cycle because no data could be obtained.
    pub missing: Vec<String>,
}

impl CycleReport {
    pub fn strong_buys(&self) -> Vec<&TickerEvaluation> {
        rank_strong_buys(&self.results)
    }

    pub fn get(&self, ticker: &str) -> Option<&TickerEvaluation> {
        self.results.iter().find(|r| r.ticker.eq_ignore_ascii_case(ticker))
    }
}

/// Drives every configured ticker through fetch → indicators → signals.
pub struct Monitor {
    config: RuntimeConfig,
    provider: Arc<dyn PriceSeriesProvider + Send + Sync>,
}

impl Monitor {
    pub fn new(config: RuntimeConfig, provider: Arc<dyn PriceSeriesProvider + Send + Sync>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Evaluate the universe once. Provider calls are made one at a time
    /// with `request_delay` between them; a ticker that fails or returns no
    /// bars is recorded as missing and does not affect the others.
    pub async fn run_cycle(&self) -> CycleReport {
        let timestamp = Utc::now();
        let mut results = Vec::with_capacity(self.config.tickers.len());
        let mut missing = Vec::new();

        info!(
            ticker_count = self.config.tickers.len(),
            "Monitor: starting cycle for {} tickers",
            self.config.tickers.len()
        );

        for (i, ticker) in self.config.tickers.iter().enumerate() {
            if i > 0 && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }

            match self.evaluate_ticker(ticker).await {
                Some(evaluation) => results.push(evaluation),
                None => missing.push(ticker.clone()),
            }
        }

        info!(
            evaluated = results.len(),
            missing = missing.len(),
            strong_buys = results.iter().filter(|r| r.strong_buy).count(),
            "Monitor: cycle complete"
        );

        CycleReport {
            timestamp,
            results,
            missing,
        }
    }

    /// Fetch and evaluate a single ticker. `None` means "no data".
    pub async fn evaluate_ticker(&self, ticker: &str) -> Option<TickerEvaluation> {
        let series = match self.fetch_with_retry(ticker).await {
            Ok(series) => series,
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "Monitor: fetch failed for {}", ticker);
                return None;
            }
        };

        let Some(evaluation) = SignalEngine::evaluate(ticker, &series) else {
            warn!(ticker = %ticker, "Monitor: no data available for {}", ticker);
            return None;
        };

        debug!(
            ticker = %ticker,
            bars = series.len(),
            score = evaluation.score,
            signals = evaluation.signals.len(),
            strong_buy = evaluation.strong_buy,
            "Monitor: evaluated {}",
            ticker
        );
        Some(evaluation)
    }

    async fn fetch_with_retry(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let lookback_days = self.config.lookback_days;
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.config.retry_delay)
            .with_max_times(self.config.fetch_retries);

        (|| self.provider.fetch(ticker, lookback_days))
            .retry(backoff)
            .when(ProviderError::is_transient)
            .notify(|e: &ProviderError, delay: Duration| {
                warn!(
                    ticker = %ticker,
                    error = %e,
                    retry_in_ms = delay.as_millis() as u64,
                    "Monitor: transient fetch error for {}, retrying",
                    ticker
                );
            })
            .await
    }
}
