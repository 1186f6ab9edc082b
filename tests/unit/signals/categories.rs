//! Unit tests for ticker categorization

use stockwatch::signals::categories::{Categorizer, Sector, UNIVERSE};

#[test]
fn test_known_tickers() {
    assert_eq!(Categorizer::categorize("IONQ"), Sector::QuantumPurePlay);
    assert_eq!(Categorizer::categorize("GOOGL"), Sector::BigTech);
    assert_eq!(Categorizer::categorize("LMT"), Sector::DefenseIndustrial);
    assert_eq!(Categorizer::categorize("HDSN"), Sector::AiInfrastructure);
}

#[test]
fn test_lookup_ignores_case() {
    assert_eq!(Categorizer::categorize("msft"), Sector::BigTech);
}

#[test]
fn test_unknown_ticker_is_general() {
    assert_eq!(Categorizer::categorize("AAPL"), Sector::General);
    assert_eq!(Categorizer::categorize(""), Sector::General);
}

#[test]
fn test_universe_order() {
    let universe = Categorizer::universe();
    assert_eq!(universe.len(), UNIVERSE.len());
    assert_eq!(universe.first().map(String::as_str), Some("IONQ"));
    assert_eq!(universe.last().map(String::as_str), Some("HDSN"));
    assert_eq!(Categorizer::tickers_in(Sector::DefenseIndustrial), vec!["HON", "LMT"]);
    assert!(Categorizer::tickers_in(Sector::General).is_empty());
}

#[test]
fn test_sector_labels() {
    assert_eq!(Sector::AiInfrastructure.to_string(), "AI Infrastructure");
    assert_eq!(Sector::General.label(), "General");
}
