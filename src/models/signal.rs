use serde::{Deserialize, Serialize};

/// Indicator family a signal was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
}

impl SignalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SignalCategory::Trend => "Trend",
            SignalCategory::Momentum => "Momentum",
            SignalCategory::Volatility => "Volatility",
            SignalCategory::Volume => "Volume",
        }
    }
}

/// One triggered rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub description: String,
    pub score_delta: f64,
}

impl Signal {
    pub fn new(category: SignalCategory, description: impl Into<String>, score_delta: f64) -> Self {
        Self {
            category,
            description: description.into(),
            score_delta,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.score_delta > 0.0
    }
}

/// Signals in rule order plus their summed score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub signals: Vec<Signal>,
    pub score: f64,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: Signal) {
        self.score += signal.score_delta;
        self.signals.push(signal);
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signal> {
        self.signals.iter()
    }

    pub fn by_category(&self, category: SignalCategory) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(move |s| s.category == category)
    }
}
