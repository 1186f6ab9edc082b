//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::market::PriceSeries;

pub const RSI_PERIOD: usize = 14;

/// RSI for every bar
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are simple trailing means over `period` price changes
/// (partial windows during warm-up); the first bar has no change and counts
/// as neither. A zero average loss is floored to [`math::EPSILON`], which
/// drives RSI towards 100 rather than dividing by zero.
pub fn calculate_rsi_series(closes: &[f64], period: usize) -> Vec<f64> {
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        let change = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gains = math::rolling_mean(&gains, period);
    let avg_losses = math::rolling_mean(&losses, period);

    avg_gains
        .iter()
        .zip(avg_losses.iter())
        .map(|(&gain, &loss)| {
            let loss = if loss == 0.0 { math::EPSILON } else { loss };
            let rs = gain / loss;
            let rsi = 100.0 - (100.0 / (1.0 + rs));
            if rsi.is_nan() {
                rsi
            } else {
                rsi.clamp(0.0, 100.0)
            }
        })
        .collect()
}

/// RSI at the latest bar with the default period (14)
pub fn calculate_rsi_default(series: &PriceSeries) -> Option<f64> {
    calculate_rsi_series(&series.closes(), RSI_PERIOD)
        .last()
        .copied()
        .and_then(math::finite)
}
