//! Unit tests for strong-buy scoring

use crate::support::day;
use stockwatch::models::indicators::IndicatorSnapshot;
use stockwatch::models::signal::SignalSet;
use stockwatch::signals::categories::Sector;
use stockwatch::signals::engine::TickerEvaluation;
use stockwatch::signals::scoring::{is_strong_buy, rank_strong_buys};

fn evaluation(ticker: &str, score: f64) -> TickerEvaluation {
    TickerEvaluation {
        ticker: ticker.to_string(),
        category: Sector::General,
        indicators: IndicatorSnapshot::neutral(day(0), 1.0),
        signals: SignalSet::new(),
        score,
        strong_buy: is_strong_buy(score),
    }
}

#[test]
fn test_threshold() {
    assert!(is_strong_buy(3.0));
    assert!(is_strong_buy(5.5));
    assert!(!is_strong_buy(2.99));
    assert!(!is_strong_buy(-1.0));
}

#[test]
fn test_rank_descending_and_stable() {
    let evaluations = vec![
        evaluation("A", 3.5),
        evaluation("B", 1.0),
        evaluation("C", 4.0),
        evaluation("D", 3.5),
        evaluation("E", 3.0),
    ];
    let ranked: Vec<&str> = rank_strong_buys(&evaluations)
        .iter()
        .map(|e| e.ticker.as_str())
        .collect();
    assert_eq!(ranked, vec!["C", "A", "D", "E"]);
}

#[test]
fn test_rank_empty() {
    assert!(rank_strong_buys(&[evaluation("A", 0.5)]).is_empty());
}
