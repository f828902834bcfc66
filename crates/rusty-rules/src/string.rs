//! Length and blank predicates
//!
//! Lengths are Unicode codepoint counts taken after trimming, never byte counts.

use crate::error::{invalid_argument, Result};
use crate::value::Value;

/// Characters stripped from both ends before any length is measured
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Strip surrounding whitespace (space, tab, newline, CR, NUL, vertical tab)
pub fn trim(s: &str) -> &str {
    s.trim_matches(TRIM_CHARS)
}

/// Codepoint count of `s` after trimming
pub fn trimmed_length(s: &str) -> usize {
    trim(s).chars().count()
}

fn coerced_length(operation: &'static str, value: &Value) -> Result<usize> {
    value
        .coerce_to_string()
        .map(|s| trimmed_length(&s))
        .ok_or_else(|| {
            invalid_argument(
                operation,
                format!("cannot measure the length of a {}", value.type_name()),
            )
        })
}

/// True when the trimmed length is at least `min`
pub fn length_at_least(value: &Value, min: usize) -> Result<bool> {
    Ok(coerced_length("length_at_least", value)? >= min)
}

/// True when the trimmed length is at most `max`
pub fn length_at_most(value: &Value, max: usize) -> Result<bool> {
    Ok(coerced_length("length_at_most", value)? <= max)
}

/// True when `min <= trimmed length <= max`.
///
/// The bounds are not checked against each other; `min > max` simply never matches.
pub fn length_between(value: &Value, min: usize, max: usize) -> Result<bool> {
    Ok(length_at_least(value, min)? && length_at_most(value, max)?)
}

/// `"", " ", "\t\n"` are all blank. Only strings are accepted.
pub fn is_blank(value: &Value) -> Result<bool> {
    match value {
        Value::String(s) => Ok(trim(s).is_empty()),
        other => Err(invalid_argument(
            "is_blank",
            format!("value must be a string, got {}", other.type_name()),
        )),
    }
}

/// `&str` shorthand for [`length_between`], used by rules that already hold a string
pub(crate) fn str_length_between(s: &str, min: usize, max: usize) -> bool {
    let len = trimmed_length(s);
    len >= min && len <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_length_validators() {
        assert!(length_at_least(&"hello".into(), 3).unwrap());
        assert!(!length_at_least(&"hi".into(), 3).unwrap());

        assert!(length_at_most(&"hello".into(), 10).unwrap());
        assert!(!length_at_most(&"verylongstring".into(), 5).unwrap());

        assert!(length_between(&"hello".into(), 3, 10).unwrap());
        assert!(!length_between(&"hi".into(), 3, 10).unwrap());
        assert!(!length_between(&"verylongstring".into(), 3, 10).unwrap());
    }

    #[test]
    fn test_lengths_are_trimmed() {
        assert!(length_at_most(&"   abc   ".into(), 3).unwrap());
        assert!(!length_at_least(&" \t\n ".into(), 1).unwrap());
    }

    #[test]
    fn test_lengths_count_codepoints() {
        // 5 codepoints, 10 bytes
        assert!(length_at_most(&"şğüöç".into(), 5).unwrap());
        assert!(length_at_least(&"şğüöç".into(), 5).unwrap());
    }

    #[test]
    fn test_non_breaking_space_is_content() {
        assert_eq!(trimmed_length("\u{a0}"), 1);
    }

    #[test]
    fn test_scalars_are_coerced() {
        assert!(length_between(&Value::Int(12345), 5, 5).unwrap());
        assert!(length_at_most(&Value::Null, 0).unwrap());
        assert!(length_between(&Value::Bool(true), 1, 1).unwrap());
    }

    #[test]
    fn test_containers_are_rejected() {
        let err = length_at_least(&Value::List(vec![]), 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument { operation: "length_at_least", .. }
        ));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(&"".into()).unwrap());
        assert!(is_blank(&"   ".into()).unwrap());
        assert!(is_blank(&"\t\r\n".into()).unwrap());
        assert!(!is_blank(&" a ".into()).unwrap());
        assert!(is_blank(&Value::Int(0)).is_err());
        assert!(is_blank(&Value::Null).is_err());
    }
}
