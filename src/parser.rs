//! Parser for plain-text lists of numbers.

use anyhow::{Result, anyhow};

/// Parses numbers separated by whitespace and/or commas.
///
/// # Errors
///
/// Returns an error naming the first token that is not a finite number.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| anyhow!("Could not parse {:?} as a number", token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_numbers("").unwrap().is_empty());
        assert!(parse_numbers(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed_separators() {
        let nums = parse_numbers("1, 2.5\n-3\t4e2,,5").unwrap();
        assert_eq!(nums, vec![1.0, 2.5, -3.0, 400.0, 5.0]);
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = parse_numbers("1 two 3").unwrap_err();
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_numbers("1 NaN").is_err());
        assert!(parse_numbers("inf").is_err());
    }
}
