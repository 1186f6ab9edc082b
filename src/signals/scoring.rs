//! Strong-buy classification and ranking

use crate::signals::engine::TickerEvaluation;
use crate::signals::thresholds::SignalThresholds;

/// Whether a summed score clears the strong-buy threshold.
pub fn is_strong_buy(score: f64) -> bool {
    score >= SignalThresholds::STRONG_BUY_SCORE
}

/// Strong-buy candidates ordered by descending score. Ties keep their
/// original order.
pub fn rank_strong_buys(evaluations: &[TickerEvaluation]) -> Vec<&TickerEvaluation> {
    let mut ranked: Vec<&TickerEvaluation> =
        evaluations.iter().filter(|e| e.strong_buy).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
