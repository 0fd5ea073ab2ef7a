use serde::{Deserialize, Serialize};

use super::utility::mean;

/// Mean, maximum and minimum of a list of numbers. The mean is not rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

/// Computes [`BasicStats`]; every field is `None` for an empty input.
pub fn basic_stats(numbers: &[f64]) -> BasicStats {
    BasicStats {
        mean: mean(numbers),
        max: numbers.iter().copied().reduce(f64::max),
        min: numbers.iter().copied().reduce(f64::min),
    }
}
