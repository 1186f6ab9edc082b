use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's adjusted OHLCV observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Chronologically ordered bars for a single ticker, oldest first.
///
/// Dates are strictly increasing. An empty series is a valid state meaning
/// the provider had nothing for the ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Build a series from bars in any order. Bars are sorted by date and,
    /// when a date repeats, the last occurrence wins.
    pub fn from_bars(mut bars: Vec<Bar>) -> Self {
        bars.reverse();
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Self { bars }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes with missing entries read as zero, or `None` when no bar in
    /// the series carries a volume at all.
    pub fn volumes(&self) -> Option<Vec<f64>> {
        if self.bars.iter().all(|b| b.volume.is_none()) {
            return None;
        }
        Some(
            self.bars
                .iter()
                .map(|b| b.volume.unwrap_or(0) as f64)
                .collect(),
        )
    }
}
