//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::market::PriceSeries;

/// SMA of closes for every bar, averaging partial windows during warm-up.
pub fn calculate_sma_series(closes: &[f64], period: usize) -> Vec<f64> {
    math::rolling_mean(closes, period)
}

/// SMA at the latest bar
pub fn calculate_sma(series: &PriceSeries, period: usize) -> Option<f64> {
    calculate_sma_series(&series.closes(), period)
        .last()
        .copied()
        .and_then(math::finite)
}
