//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::market::PriceSeries;

/// EMA of closes for every bar.
///
/// Seeded with the first close, then `ema[i] = close[i] * k + ema[i-1] * (1 - k)`
/// with `k = 2 / (span + 1)`.
pub fn calculate_ema_series(closes: &[f64], span: usize) -> Vec<f64> {
    math::ema_series(closes, span)
}

/// EMA at the latest bar
pub fn calculate_ema(series: &PriceSeries, span: usize) -> Option<f64> {
    calculate_ema_series(&series.closes(), span)
        .last()
        .copied()
        .and_then(math::finite)
}
