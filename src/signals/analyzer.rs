use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Signal, SignalCategory, SignalSet};
use crate::signals::thresholds::{SignalThresholds as T, SignalWeights as W};

/// Reduces an indicator snapshot to qualitative signals and a score.
///
/// Rules run in a fixed order and add up; within the SMA-trend group and
/// within the RSI group only the first matching rule fires.
pub struct SignalAnalyzer;

impl SignalAnalyzer {
    pub fn analyze(snapshot: &IndicatorSnapshot) -> SignalSet {
        let mut set = SignalSet::new();

        Self::analyze_trend(snapshot, &mut set);
        Self::analyze_rsi(snapshot, &mut set);
        Self::analyze_macd(snapshot, &mut set);
        Self::analyze_bollinger(snapshot, &mut set);
        Self::analyze_volume(snapshot, &mut set);

        set
    }

    fn analyze_trend(s: &IndicatorSnapshot, set: &mut SignalSet) {
        match (s.sma20, s.sma50) {
            (Some(sma20), Some(sma50)) if s.price > sma20 && sma20 > sma50 => {
                set.push(Signal::new(
                    SignalCategory::Trend,
                    format!(
                        "Strong uptrend (price {:.2} > SMA20 {:.2} > SMA50 {:.2})",
                        s.price, sma20, sma50
                    ),
                    W::STRONG_UPTREND,
                ));
            }
            (Some(sma20), _) if s.price > sma20 => {
                set.push(Signal::new(
                    SignalCategory::Trend,
                    format!("Short-term uptrend (price {:.2} > SMA20 {:.2})", s.price, sma20),
                    W::SHORT_TERM_UPTREND,
                ));
            }
            _ => {}
        }

        if let Some(sma200) = s.sma200 {
            if s.price > sma200 {
                set.push(Signal::new(
                    SignalCategory::Trend,
                    format!("Above 200-day SMA ({:.2}), long-term bullish", sma200),
                    W::ABOVE_LONG_TERM_AVERAGE,
                ));
            }
        }
    }

    fn analyze_rsi(s: &IndicatorSnapshot, set: &mut SignalSet) {
        let rsi = s.rsi;
        if T::RSI_MOMENTUM_LOW < rsi && rsi < T::RSI_MOMENTUM_HIGH {
            set.push(Signal::new(
                SignalCategory::Momentum,
                format!("RSI momentum zone ({:.1}), not overbought", rsi),
                W::RSI_MOMENTUM,
            ));
        } else if rsi < T::RSI_OVERSOLD {
            set.push(Signal::new(
                SignalCategory::Momentum,
                format!("RSI oversold ({:.1}), potential bounce", rsi),
                W::RSI_OVERSOLD,
            ));
        } else if rsi > T::RSI_OVERBOUGHT {
            set.push(Signal::new(
                SignalCategory::Momentum,
                format!("RSI overbought ({:.1}), caution", rsi),
                W::RSI_OVERBOUGHT,
            ));
        }
    }

    fn analyze_macd(s: &IndicatorSnapshot, set: &mut SignalSet) {
        if s.macd > s.macd_signal && s.macd_histogram > 0.0 {
            set.push(Signal::new(
                SignalCategory::Momentum,
                format!(
                    "MACD bullish (MACD {:.3} above signal {:.3})",
                    s.macd, s.macd_signal
                ),
                W::MACD_BULLISH,
            ));
        }
    }

    fn analyze_bollinger(s: &IndicatorSnapshot, set: &mut SignalSet) {
        if s.bb_position < T::BB_LOWER_ZONE {
            set.push(Signal::new(
                SignalCategory::Volatility,
                format!("Near lower Bollinger Band ({:.1}%), potential bounce", s.bb_position),
                W::NEAR_LOWER_BAND,
            ));
        } else if s.bb_position > T::BB_UPPER_ZONE {
            set.push(Signal::new(
                SignalCategory::Volatility,
                format!("Near upper Bollinger Band ({:.1}%), overbought", s.bb_position),
                W::NEAR_UPPER_BAND,
            ));
        }

        if s.bb_width < T::BB_SQUEEZE_WIDTH {
            set.push(Signal::new(
                SignalCategory::Volatility,
                format!("Bollinger Bands squeezing (width {:.1}%), volatility coming", s.bb_width),
                W::VOLATILITY_SQUEEZE,
            ));
        }
    }

    fn analyze_volume(s: &IndicatorSnapshot, set: &mut SignalSet) {
        if s.volume_ratio > T::HIGH_VOLUME_RATIO {
            set.push(Signal::new(
                SignalCategory::Volume,
                format!("High volume ({:.2}x avg), strong interest", s.volume_ratio),
                W::HIGH_VOLUME,
            ));
        }
    }
}
