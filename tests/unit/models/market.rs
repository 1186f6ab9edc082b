//! Unit tests for price series construction

use crate::support::day;
use stockwatch::models::market::{Bar, PriceSeries};

#[test]
fn test_from_bars_sorts_and_dedups() {
    let series = PriceSeries::from_bars(vec![
        Bar::new(day(2), 3.0, 3.0, 3.0, 3.0),
        Bar::new(day(0), 1.0, 1.0, 1.0, 1.0),
        Bar::new(day(2), 4.0, 4.0, 4.0, 4.0),
        Bar::new(day(1), 2.0, 2.0, 2.0, 2.0),
    ]);
    assert_eq!(series.closes(), vec![1.0, 2.0, 4.0]);
    assert!(series.bars().windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_volumes_absent_and_partial() {
    let none = PriceSeries::from_bars(vec![Bar::new(day(0), 1.0, 1.0, 1.0, 1.0)]);
    assert!(none.volumes().is_none());

    let partial = PriceSeries::from_bars(vec![
        Bar::new(day(0), 1.0, 1.0, 1.0, 1.0),
        Bar::new(day(1), 1.0, 1.0, 1.0, 1.0).with_volume(500),
    ]);
    assert_eq!(partial.volumes(), Some(vec![0.0, 500.0]));
}

#[test]
fn test_empty_series() {
    let series = PriceSeries::empty();
    assert!(series.is_empty());
    assert!(series.last().is_none());
}
