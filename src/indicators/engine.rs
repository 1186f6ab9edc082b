//! Full-series indicator computation and snapshot extraction.

use crate::common::math;
use crate::indicators::momentum::{calculate_macd_series, calculate_rsi_series};
use crate::indicators::momentum::{MACD_FAST, MACD_SIGNAL, MACD_SLOW, RSI_PERIOD};
use crate::indicators::trend::calculate_sma_series;
use crate::indicators::volatility::{calculate_bollinger_series, BOLLINGER_PERIOD, BOLLINGER_STD_DEV};
use crate::indicators::volume::{calculate_volume_ratio_series, VOLUME_PERIOD};
use crate::models::indicators::{IndicatorFrame, IndicatorRow, IndicatorSnapshot};
use crate::models::market::PriceSeries;

/// Stateless transform from a price series to indicator values.
pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Indicator values for every bar of `series`, or `None` for an empty series.
    pub fn compute_frame(series: &PriceSeries) -> Option<IndicatorFrame> {
        if series.is_empty() {
            return None;
        }

        let closes = series.closes();
        let sma20 = calculate_sma_series(&closes, 20);
        let sma50 = calculate_sma_series(&closes, 50);
        let sma200 = calculate_sma_series(&closes, 200);
        let bands = calculate_bollinger_series(&closes, BOLLINGER_PERIOD, BOLLINGER_STD_DEV);
        let rsi = calculate_rsi_series(&closes, RSI_PERIOD);
        let macd = calculate_macd_series(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        let volume_ratio = match series.volumes() {
            Some(volumes) => calculate_volume_ratio_series(&volumes, VOLUME_PERIOD),
            None => vec![IndicatorSnapshot::DEFAULT_VOLUME_RATIO; closes.len()],
        };

        let rows = series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                date: bar.date,
                close: bar.close,
                volume: bar.volume,
                sma20: sma20[i],
                sma50: sma50[i],
                sma200: sma200[i],
                bb_middle: bands[i].middle,
                bb_upper: bands[i].upper,
                bb_lower: bands[i].lower,
                bb_width: bands[i].width,
                bb_position: bands[i].position,
                rsi: rsi[i],
                macd: macd[i].macd,
                macd_signal: macd[i].signal,
                macd_histogram: macd[i].histogram,
                volume_ratio: volume_ratio[i],
            })
            .collect();

        IndicatorFrame::new(rows)
    }

    /// Snapshot of the latest bar, or `None` for an empty series.
    pub fn compute(series: &PriceSeries) -> Option<IndicatorSnapshot> {
        Self::compute_frame(series).map(|frame| Self::snapshot(&frame))
    }

    /// Resolve the latest row of a frame into a snapshot, substituting
    /// defaults for anything non-finite.
    pub fn snapshot(frame: &IndicatorFrame) -> IndicatorSnapshot {
        let latest = frame.latest();
        let previous = frame.previous();

        let bb_upper = math::finite(latest.bb_upper);
        let bb_lower = math::finite(latest.bb_lower);
        let bb_position = match (bb_upper, bb_lower) {
            (Some(upper), Some(lower)) if upper != lower => math::finite_or(
                latest.bb_position,
                IndicatorSnapshot::DEFAULT_BB_POSITION,
            ),
            _ => IndicatorSnapshot::DEFAULT_BB_POSITION,
        };

        IndicatorSnapshot {
            date: latest.date,
            price: math::finite_or(latest.close, 0.0),
            change_pct: change_pct(latest.close, previous.close),
            volume: latest.volume.unwrap_or(0),
            volume_ratio: math::finite_or(latest.volume_ratio, IndicatorSnapshot::DEFAULT_VOLUME_RATIO),
            sma20: math::finite(latest.sma20),
            sma50: math::finite(latest.sma50),
            sma200: math::finite(latest.sma200),
            bb_upper,
            bb_middle: math::finite(latest.bb_middle),
            bb_lower,
            bb_width: math::finite_or(latest.bb_width, 0.0),
            bb_position,
            rsi: math::finite_or(latest.rsi, IndicatorSnapshot::DEFAULT_RSI),
            macd: math::finite_or(latest.macd, 0.0),
            macd_signal: math::finite_or(latest.macd_signal, 0.0),
            macd_histogram: math::finite_or(latest.macd_histogram, 0.0),
        }
    }
}

/// Percent change from `previous` to `latest`, 0 when `previous` is zero.
fn change_pct(latest: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    math::finite_or((latest - previous) / previous * 100.0, 0.0)
}
