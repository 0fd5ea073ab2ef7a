/// Arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum of squared deviations from a pre-computed mean.
pub fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Median of an ascending slice. Even lengths average the two middle values.
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(sorted[n / 2]),
        _ => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
    }
}

/// Rounds `value` to `digits` decimal places.
///
/// Rounds the exact decimal expansion of the double, ties to even, so
/// `0.0078125` becomes `0.007812`. Values too large to scale without
/// overflowing are returned untouched.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !(value * 10f64.powi(digits as i32)).is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}
