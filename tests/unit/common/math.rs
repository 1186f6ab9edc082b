//! Unit tests for windowed statistics

use stockwatch::common::math::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_rolling_mean_uses_partial_windows() {
    let values = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(rolling_mean(&values, 2), vec![1.0, 1.5, 2.5, 3.5]);
    assert_eq!(rolling_mean(&values, 10), vec![1.0, 1.5, 2.0, 2.5]);
}

#[test]
fn test_rolling_mean_empty_input() {
    assert!(rolling_mean(&[], 20).is_empty());
}

#[test]
fn test_sample_std_known_value() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_close(sample_std(&values).unwrap(), (32.0f64 / 7.0).sqrt());
}

#[test]
fn test_sample_std_degenerate_windows() {
    assert_eq!(sample_std(&[]), None);
    assert_eq!(sample_std(&[42.0]), Some(0.0));
    assert_eq!(sample_std(&[10.1; 20]), Some(0.0));
}

#[test]
fn test_rolling_std_first_entry_is_zero() {
    let stds = rolling_std(&[1.0, 3.0, 5.0], 20);
    assert_eq!(stds[0], 0.0);
    assert_close(stds[1], 2.0f64.sqrt());
    assert_close(stds[2], 2.0);
}

#[test]
fn test_ema_series_seeded_with_first_value() {
    let ema = ema_series(&[10.0, 20.0], 3);
    assert_eq!(ema[0], 10.0);
    // k = 2 / (3 + 1) = 0.5
    assert_close(ema[1], 15.0);
}

#[test]
fn test_finite_helpers() {
    assert_eq!(finite(1.5), Some(1.5));
    assert_eq!(finite(f64::NAN), None);
    assert_eq!(finite(f64::INFINITY), None);
    assert_eq!(finite_or(f64::NAN, 50.0), 50.0);
    assert_eq!(finite_or(3.0, 50.0), 3.0);
}
