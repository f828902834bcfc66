//! Numeric validation functions
//!
//! Booleans are never numbers here, even though they coerce to "1" and "".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::trim;
use crate::value::Value;

// Optional sign, then 0 or a digit string without leading zeros
static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?(?:0|[1-9][0-9]*)$").unwrap());

// 1, 1.5, 1., .5, with optional exponent
static FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// A value that passed numeric classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Parse trimmed integer syntax; out-of-range values are rejected
pub fn parse_integer(s: &str) -> Option<i64> {
    let s = trim(s);
    if !INTEGER_REGEX.is_match(s) {
        return None;
    }
    s.parse::<i64>().ok()
}

/// Parse trimmed decimal syntax; the result must be finite
pub fn parse_float(s: &str) -> Option<f64> {
    let s = trim(s);
    if !FLOAT_REGEX.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Integer-valued input: an `Int`, a whole `Float`, or a string in integer syntax
pub fn is_integer(value: &Value) -> bool {
    as_integer(value).is_some()
}

/// Decimal input: any integer, a finite `Float`, or a string in decimal syntax
pub fn is_float(value: &Value) -> bool {
    match value {
        Value::Bool(_) | Value::Null | Value::List(_) | Value::Map(_) => false,
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite(),
        Value::String(s) => parse_float(s).is_some(),
    }
}

pub fn is_number(value: &Value) -> bool {
    is_integer(value) || is_float(value)
}

pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(_) | Value::Null | Value::List(_) | Value::Map(_) => None,
        Value::Int(i) => Some(*i),
        Value::Float(_) => value.coerce_to_string().as_deref().and_then(parse_integer),
        Value::String(s) => parse_integer(s),
    }
}

/// Numeric reading of a value that passes [`is_number`]
pub fn as_number(value: &Value) -> Option<Number> {
    if let Some(i) = as_integer(value) {
        return Some(Number::Int(i));
    }
    match value {
        Value::Float(f) if f.is_finite() => Some(Number::Float(*f)),
        Value::String(s) => parse_float(s).map(Number::Float),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_validation() {
        assert!(is_integer(&Value::Int(10)));
        assert!(is_integer(&"10".into()));
        assert!(is_integer(&"-10".into()));
        assert!(is_integer(&"+10".into()));
        assert!(is_integer(&"0".into()));
        assert!(is_integer(&" 42 ".into()));
        assert!(is_integer(&Value::Float(5.0)));

        assert!(!is_integer(&"1.5".into()));
        assert!(!is_integer(&"1e3".into()));
        assert!(!is_integer(&"007".into()));
        assert!(!is_integer(&"".into()));
        assert!(!is_integer(&"abc".into()));
        assert!(!is_integer(&"9223372036854775808".into()));
        assert!(!is_integer(&Value::Float(5.5)));
        assert!(!is_integer(&Value::Null));
    }

    #[test]
    fn test_float_validation() {
        assert!(is_float(&Value::Float(18.5)));
        assert!(is_float(&Value::Int(18)));
        assert!(is_float(&"18.5".into()));
        assert!(is_float(&"-.5".into()));
        assert!(is_float(&"1.".into()));
        assert!(is_float(&"2.5E-4".into()));
        assert!(is_float(&"10".into()));

        assert!(!is_float(&"1,5".into()));
        assert!(!is_float(&"1e999".into()));
        assert!(!is_float(&"inf".into()));
        assert!(!is_float(&".".into()));
        assert!(!is_float(&Value::Float(f64::NAN)));
    }

    #[test]
    fn test_booleans_are_not_numbers() {
        for b in [true, false] {
            assert!(!is_integer(&Value::Bool(b)));
            assert!(!is_float(&Value::Bool(b)));
            assert!(!is_number(&Value::Bool(b)));
        }
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&"12".into()), Some(Number::Int(12)));
        assert_eq!(as_number(&"1.5".into()), Some(Number::Float(1.5)));
        assert_eq!(as_number(&Value::Float(3.0)), Some(Number::Int(3)));
        assert_eq!(as_number(&"x".into()), None);
    }
}
