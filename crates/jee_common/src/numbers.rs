//! Numeric value extraction from question text.
//!
//! Used only to decorate solution text; never affects classification.

use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+\.?\d*(?:[eE][+-]?\d+)?").unwrap());

/// Most values echoed back in a solution
pub const MAX_ECHOED_VALUES: usize = 8;

/// Extract signed decimal numbers (with optional exponent) in order of appearance.
///
/// Matches that do not parse as `f64` are skipped.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Render values for display: integers without a trailing `.0`
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .take(MAX_ECHOED_VALUES)
        .map(|v| {
            if v.fract() == 0.0 && v.abs() < 1e15 {
                format!("{}", *v as i64)
            } else {
                format!("{}", v)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_signed_exponent() {
        assert_eq!(extract_numbers("-12.5e3 and 7"), vec![-12500.0, 7.0]);
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_numbers("").is_empty());
        assert!(extract_numbers("abc").is_empty());
    }

    #[test]
    fn test_extract_order_preserved() {
        assert_eq!(
            extract_numbers("40g NaOH in 500ml water at 2.5E-2 M"),
            vec![40.0, 500.0, 0.025]
        );
    }

    #[test]
    fn test_extract_trailing_dot() {
        // "3." is a valid match and parses as 3.0
        assert_eq!(extract_numbers("x = 3. done"), vec![3.0]);
    }

    #[test]
    fn test_extract_exponent_without_digits_is_not_consumed() {
        // "5e" is not an exponent; only "5" matches
        assert_eq!(extract_numbers("5e"), vec![5.0]);
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[40.0, 500.0, 0.025, -3.0]), "40, 500, 0.025, -3");
        assert_eq!(format_values(&[]), "");
    }

    #[test]
    fn test_format_values_capped() {
        let values: Vec<f64> = (1..=20).map(f64::from).collect();
        assert_eq!(format_values(&values).split(", ").count(), MAX_ECHOED_VALUES);
    }
}
