//! Turns a raw request body into a validated list of numbers.

use serde_json::Value;

use super::error::{ApiError, FieldError, LocPart};

const FIELD: &str = "numbers";

/// Parses a `{"numbers": [...]}` body.
///
/// Every element must be a JSON number; booleans, strings and nulls are
/// rejected rather than coerced. All bad elements are reported at once.
/// `max_numbers` caps the length of the list.
pub fn parse_numbers(body: &[u8], max_numbers: usize) -> Result<Vec<f64>, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        single(FieldError::new(
            "json_invalid",
            vec![LocPart::Key("body")],
            format!("JSON decode error: {}", e),
        ))
    })?;

    let loc = || vec![LocPart::Key("body"), LocPart::Key(FIELD)];

    let items = match payload.get(FIELD) {
        None => return Err(single(FieldError::new("missing", loc(), "Field required"))),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(single(FieldError::new(
                "list_type",
                loc(),
                "Input should be a valid list",
            )));
        }
    };

    if items.len() > max_numbers {
        return Err(single(FieldError::new(
            "too_long",
            loc(),
            format!("List should have at most {} items", max_numbers),
        )));
    }

    let mut numbers = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match item.as_f64() {
            Some(n) => numbers.push(n),
            None => {
                let mut at = loc();
                at.push(LocPart::Index(i));
                errors.push(FieldError::new("float_type", at, "Input should be a valid number"));
            }
        }
    }

    if errors.is_empty() {
        Ok(numbers)
    } else {
        Err(ApiError::Validation(errors))
    }
}

fn single(err: FieldError) -> ApiError {
    ApiError::Validation(vec![err])
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 1_000;

    fn kinds(result: Result<Vec<f64>, ApiError>) -> Vec<&'static str> {
        match result {
            Err(ApiError::Validation(errors)) => errors.iter().map(|e| e.kind).collect(),
            Ok(nums) => panic!("expected validation failure, got {:?}", nums),
            Err(other) => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_integers_and_floats() {
        let nums = parse_numbers(br#"{"numbers": [1, 2.5, -3, 1e3]}"#, MAX).unwrap();
        assert_eq!(nums, vec![1.0, 2.5, -3.0, 1000.0]);
    }

    #[test]
    fn test_accepts_empty_list() {
        assert!(parse_numbers(br#"{"numbers": []}"#, MAX).unwrap().is_empty());
    }

    #[test]
    fn test_ignores_extra_fields() {
        let nums = parse_numbers(br#"{"numbers": [4], "label": "x"}"#, MAX).unwrap();
        assert_eq!(nums, vec![4.0]);
    }

    #[test]
    fn test_rejects_invalid_json_and_empty_body() {
        assert_eq!(kinds(parse_numbers(b"invalid json", MAX)), vec!["json_invalid"]);
        assert_eq!(kinds(parse_numbers(b"", MAX)), vec!["json_invalid"]);
    }

    #[test]
    fn test_rejects_missing_field() {
        assert_eq!(kinds(parse_numbers(br#"{"wrong_field": [1]}"#, MAX)), vec!["missing"]);
        assert_eq!(kinds(parse_numbers(b"{}", MAX)), vec!["missing"]);
        assert_eq!(kinds(parse_numbers(b"[1, 2]", MAX)), vec!["missing"]);
    }

    #[test]
    fn test_rejects_non_list() {
        assert_eq!(kinds(parse_numbers(br#"{"numbers": null}"#, MAX)), vec!["list_type"]);
        assert_eq!(
            kinds(parse_numbers(br#"{"numbers": "not a list"}"#, MAX)),
            vec!["list_type"]
        );
    }

    #[test]
    fn test_reports_every_bad_element() {
        let result = parse_numbers(br#"{"numbers": [1, "2", 3.5, true, null]}"#, MAX);
        match result {
            Err(ApiError::Validation(errors)) => {
                let indices: Vec<_> = errors.iter().map(|e| e.loc[2].clone()).collect();
                assert_eq!(
                    indices,
                    vec![LocPart::Index(1), LocPart::Index(3), LocPart::Index(4)]
                );
            }
            Ok(_) => panic!("expected validation failure"),
            Err(other) => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_too_many_numbers() {
        assert_eq!(kinds(parse_numbers(br#"{"numbers": [1, 2, 3]}"#, 2)), vec!["too_long"]);
        assert!(parse_numbers(br#"{"numbers": [1, 2]}"#, 2).is_ok());
    }
}
