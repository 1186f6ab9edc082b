use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw derived values for one bar.
///
/// Values are kept exactly as computed and may be non-finite for degenerate
/// input; [`IndicatorSnapshot`] is the sanitized view handed to the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: Option<u64>,
    pub sma20: f64,
    pub sma50: f64,
    pub sma200: f64,
    pub bb_middle: f64,
    pub bb_upper: f64,
    pub bb_lower: f64,
    pub bb_width: f64,
    pub bb_position: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub volume_ratio: f64,
}

/// Per-bar indicator values for a whole series, oldest first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    /// `None` when there are no rows.
    pub fn new(rows: Vec<IndicatorRow>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn latest(&self) -> &IndicatorRow {
        &self.rows[self.rows.len() - 1]
    }

    /// The bar before the latest one; the latest bar itself for a one-bar frame.
    pub fn previous(&self) -> &IndicatorRow {
        let n = self.rows.len();
        &self.rows[n.saturating_sub(2)]
    }
}

/// Indicator readings at the most recent bar, with every field resolved to a
/// finite value or an explicit default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub date: NaiveDate,
    pub price: f64,
    pub change_pct: f64,
    pub volume: u64,
    pub volume_ratio: f64,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub bb_width: f64,
    pub bb_position: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
}

impl IndicatorSnapshot {
    pub const DEFAULT_RSI: f64 = 50.0;
    pub const DEFAULT_BB_POSITION: f64 = 50.0;
    pub const DEFAULT_VOLUME_RATIO: f64 = 1.0;

    /// A snapshot at `price` with every indicator at its neutral default.
    pub fn neutral(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            change_pct: 0.0,
            volume: 0,
            volume_ratio: Self::DEFAULT_VOLUME_RATIO,
            sma20: None,
            sma50: None,
            sma200: None,
            bb_upper: None,
            bb_middle: None,
            bb_lower: None,
            bb_width: 0.0,
            bb_position: Self::DEFAULT_BB_POSITION,
            rsi: Self::DEFAULT_RSI,
            macd: 0.0,
            macd_signal: 0.0,
            macd_histogram: 0.0,
        }
    }
}
