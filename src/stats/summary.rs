use serde::{Deserialize, Serialize};

use super::mode::modes;
use super::utility::{median_sorted, round_to, sum_squared_deviations};

/// Decimal digits kept in the reported mean, variance and standard deviation.
pub const REPORTED_DIGITS: usize = 6;

/// Descriptive statistics for one list of numbers.
///
/// Every field except `count` is `None` when the input is empty and serializes
/// to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<Vec<f64>>,
    pub std_dev: Option<f64>,
    pub variance: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub range: Option<f64>,
    pub sum: Option<f64>,
}

impl StatsResult {
    /// The result for an empty input: nothing is defined but the count.
    pub fn empty() -> Self {
        StatsResult {
            count: 0,
            mean: None,
            median: None,
            mode: None,
            std_dev: None,
            variance: None,
            min: None,
            max: None,
            range: None,
            sum: None,
        }
    }
}

/// Computes the full statistics record for `numbers`.
///
/// Input order does not matter and the input is never modified. Values are
/// expected to be finite.
///
/// # Examples
///
/// ```
/// let stats = stats_api::stats::compute_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(stats.count, 5);
/// assert_eq!(stats.median, Some(3.0));
/// assert_eq!(stats.variance, Some(2.5));
/// ```
pub fn compute_stats(numbers: &[f64]) -> StatsResult {
    let count = numbers.len();
    if count == 0 {
        return StatsResult::empty();
    }

    let sum: f64 = numbers.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[count - 1];
    let median = median_sorted(&sorted);

    // A single value has no spread; n - 1 would be zero.
    let (variance, std_dev) = if count == 1 {
        (0.0, 0.0)
    } else {
        let variance = sum_squared_deviations(numbers, mean) / (count - 1) as f64;
        (variance, variance.sqrt())
    };

    StatsResult {
        count,
        mean: Some(round_to(mean, REPORTED_DIGITS)),
        median,
        mode: modes(numbers),
        std_dev: Some(round_to(std_dev, REPORTED_DIGITS)),
        variance: Some(round_to(variance, REPORTED_DIGITS)),
        min: Some(min),
        max: Some(max),
        range: Some(max - min),
        sum: Some(sum),
    }
}
