//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::market::PriceSeries;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD for every bar
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd_series(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> Vec<MacdIndicator> {
    let fast = math::ema_series(closes, fast_span);
    let slow = math::ema_series(closes, slow_span);

    let macd_line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
    let signal_line = math::ema_series(&macd_line, signal_span);

    macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(&macd, &signal)| MacdIndicator {
            macd,
            signal,
            histogram: macd - signal,
        })
        .collect()
}

/// MACD at the latest bar with default spans (12, 26, 9)
pub fn calculate_macd_default(series: &PriceSeries) -> Option<MacdIndicator> {
    calculate_macd_series(&series.closes(), MACD_FAST, MACD_SLOW, MACD_SIGNAL)
        .last()
        .copied()
}
