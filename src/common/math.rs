//! Windowed statistics over `f64` series.
//!
//! Every rolling function here uses "minimum periods of one": the window for
//! index `i` covers `values[i.saturating_sub(window - 1)..=i]`, so warm-up
//! entries are computed over however many points exist instead of being left
//! undefined.

/// Tiny positive value substituted for a zero divisor.
pub const EPSILON: f64 = 1e-10;

fn window_bounds(i: usize, window: usize) -> std::ops::RangeInclusive<usize> {
    let window = window.max(1);
    i.saturating_sub(window - 1)..=i
}

/// Arithmetic mean of a slice. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// A single point, or a window whose values are all identical, has zero
/// deviation.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    if values.len() < 2 || values.iter().all(|v| *v == values[0]) {
        return Some(0.0);
    }
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Trailing simple moving average for every index.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| mean(&values[window_bounds(i, window)]).unwrap_or(f64::NAN))
        .collect()
}

/// Trailing sample standard deviation for every index.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| sample_std(&values[window_bounds(i, window)]).unwrap_or(f64::NAN))
        .collect()
}

/// Smoothing factor for an EMA of the given span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Next EMA value given the previous one.
pub fn ema_from_previous(value: f64, previous: f64, span: usize) -> f64 {
    let k = ema_alpha(span);
    value * k + previous * (1.0 - k)
}

/// Exponential moving average series seeded with the first value.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let next = match previous {
            Some(prev) => ema_from_previous(value, prev, span),
            None => value,
        };
        out.push(next);
        previous = Some(next);
    }
    out
}

/// `Some(value)` when finite, otherwise `None`.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `value` when finite, otherwise `default`.
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}
