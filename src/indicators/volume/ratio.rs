//! Volume ratio: current volume relative to its recent average

use crate::common::math;
use crate::models::market::PriceSeries;

pub const VOLUME_PERIOD: usize = 20;

/// Volume divided by its trailing SMA for every bar.
///
/// A zero average is floored to 1 so a dead market reads as its raw volume
/// (zero) rather than dividing by zero.
pub fn calculate_volume_ratio_series(volumes: &[f64], period: usize) -> Vec<f64> {
    let averages = math::rolling_mean(volumes, period);
    volumes
        .iter()
        .zip(averages.iter())
        .map(|(&volume, &average)| {
            let average = if average == 0.0 { 1.0 } else { average };
            volume / average
        })
        .collect()
}

/// Volume ratio at the latest bar; 1.0 when the series carries no volume.
pub fn calculate_volume_ratio_default(series: &PriceSeries) -> f64 {
    series
        .volumes()
        .and_then(|volumes| {
            calculate_volume_ratio_series(&volumes, VOLUME_PERIOD)
                .last()
                .copied()
        })
        .map(|ratio| math::finite_or(ratio, 1.0))
        .unwrap_or(1.0)
}
