//! Unit tests for MACD indicator

use crate::support::{rising_closes, series_from_closes};
use stockwatch::indicators::momentum::*;

#[test]
fn test_macd_constant_series_is_zero() {
    for point in calculate_macd_series(&[25.0; 60], MACD_FAST, MACD_SLOW, MACD_SIGNAL) {
        assert_eq!(point.macd, 0.0);
        assert_eq!(point.signal, 0.0);
        assert_eq!(point.histogram, 0.0);
    }
}

#[test]
fn test_macd_uptrend_is_bullish() {
    let macd = calculate_macd_default(&series_from_closes(&rising_closes(60, 100.0, 1.0))).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.macd > macd.signal);
    assert!(macd.histogram > 0.0);
}

#[test]
fn test_macd_histogram_is_difference() {
    for point in calculate_macd_series(&rising_closes(40, 10.0, 0.3), 12, 26, 9) {
        assert_eq!(point.histogram, point.macd - point.signal);
    }
}

#[test]
fn test_macd_single_bar() {
    let macd = calculate_macd_default(&series_from_closes(&[10.0])).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.histogram, 0.0);
}
