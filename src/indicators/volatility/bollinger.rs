//! Bollinger Bands indicator

use crate::common::math;
use crate::models::market::PriceSeries;

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Band values at one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// Band spread as a percentage of the middle band.
    pub width: f64,
    /// Where the close sits between the bands, 0 at the lower band and 100
    /// at the upper band.
    pub position: f64,
}

/// Bollinger Bands for every bar
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn calculate_bollinger_series(
    closes: &[f64],
    period: usize,
    std_dev: f64,
) -> Vec<BollingerBandsIndicator> {
    let middles = math::rolling_mean(closes, period);
    let stds = math::rolling_std(closes, period);

    closes
        .iter()
        .zip(middles.iter().zip(stds.iter()))
        .map(|(&close, (&middle, &std))| {
            let upper = middle + std_dev * std;
            let lower = middle - std_dev * std;
            BollingerBandsIndicator {
                upper,
                middle,
                lower,
                width: band_width(upper, lower, middle),
                position: band_position(close, upper, lower),
            }
        })
        .collect()
}

/// `(upper - lower) / middle * 100`, zero when the ratio is not finite.
pub fn band_width(upper: f64, lower: f64, middle: f64) -> f64 {
    if middle == 0.0 {
        return 0.0;
    }
    let width = (upper - lower) / middle * 100.0;
    if width.is_infinite() {
        0.0
    } else {
        width
    }
}

/// `(close - lower) / (upper - lower) * 100`, exactly 50 when the bands
/// collapse onto each other.
pub fn band_position(close: f64, upper: f64, lower: f64) -> f64 {
    if upper == lower {
        return 50.0;
    }
    (close - lower) / (upper - lower) * 100.0
}

/// Bollinger Bands at the latest bar with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &PriceSeries) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_series(&series.closes(), BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
        .last()
        .copied()
}
