//! Lenient parsing of user-typed number lists.
//!
//! The step-by-step view accepts free text such as `"5, 3,x, 8"`. Tokens
//! are comma-separated and whitespace-trimmed; anything that fails to
//! parse is dropped without error. Callers treat an empty result as
//! "nothing to sort" and skip the run.

use std::str::FromStr;

/// Parse a comma-separated list, silently discarding invalid tokens.
///
/// ```
/// use sortviz_core::parse_values;
///
/// let values: Vec<i64> = parse_values(" 5, 3,abc,, 8 ,1");
/// assert_eq!(values, [5, 3, 8, 1]);
/// ```
pub fn parse_values<T: FromStr>(text: &str) -> Vec<T> {
    text.split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_values::<i64>("").is_empty());
        assert!(parse_values::<i64>(" , ,").is_empty());
    }

    #[test]
    fn non_numeric_tokens_are_dropped() {
        assert_eq!(parse_values::<i64>("1, two, 3"), [1, 3]);
        assert_eq!(parse_values::<i64>("1.5, 2"), [2]);
    }

    #[test]
    fn floats_parse() {
        assert_eq!(parse_values::<f64>("1.5, -2, 3e1"), [1.5, -2.0, 30.0]);
    }

    #[test]
    fn inner_whitespace_is_not_a_separator() {
        assert!(parse_values::<i64>("1 2").is_empty());
    }

    proptest! {
        #[test]
        fn joined_integers_round_trip(values in prop::collection::vec(any::<i64>(), 0..32)) {
            let text = values
                .iter()
                .map(|v| format!(" {v} "))
                .collect::<Vec<_>>()
                .join(",");
            prop_assert_eq!(parse_values::<i64>(&text), values);
        }
    }
}
