//! Per-ticker evaluation: indicators, signals and sector in one record.

use crate::indicators::IndicatorEngine;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::PriceSeries;
use crate::models::signal::SignalSet;
use crate::signals::analyzer::SignalAnalyzer;
use crate::signals::categories::{Categorizer, Sector};
use crate::signals::scoring::is_strong_buy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerEvaluation {
    pub ticker: String,
    pub category: Sector,
    pub indicators: IndicatorSnapshot,
    pub signals: SignalSet,
    pub score: f64,
    pub strong_buy: bool,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a ticker's series. `None` when the series is empty.
    pub fn evaluate(ticker: &str, series: &PriceSeries) -> Option<TickerEvaluation> {
        let snapshot = IndicatorEngine::compute(series)?;
        Some(Self::evaluate_snapshot(ticker, snapshot))
    }

    pub fn evaluate_snapshot(ticker: &str, snapshot: IndicatorSnapshot) -> TickerEvaluation {
        let signals = SignalAnalyzer::analyze(&snapshot);
        let score = signals.score;
        TickerEvaluation {
            ticker: ticker.to_string(),
            category: Categorizer::categorize(ticker),
            indicators: snapshot,
            signals,
            score,
            strong_buy: is_strong_buy(score),
        }
    }
}
