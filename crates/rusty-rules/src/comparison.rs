//! Range membership and loose equality

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{invalid_argument, Result};
use crate::numeric::{as_number, Number};
use crate::value::Value;

// Numeric strings may carry surrounding whitespace, including form feed
static NUMERIC_STRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .unwrap()
});

/// Inclusive range check: `min <= number <= max`.
///
/// All three arguments must be numbers (see [`crate::is_number`]).
pub fn is_between(number: &Value, min: &Value, max: &Value) -> Result<bool> {
    let (Some(lo), Some(hi)) = (as_number(min), as_number(max)) else {
        return Err(invalid_argument(
            "is_between",
            "min and max parameters must be numbers",
        ));
    };
    let Some(n) = as_number(number) else {
        return Err(invalid_argument(
            "is_between",
            format!("first parameter must be a number, got {}", number.type_name()),
        ));
    };

    Ok(compare(n, lo).is_ge() && compare(n, hi).is_le())
}

fn compare(a: Number, b: Number) -> std::cmp::Ordering {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.cmp(&y),
        _ => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(std::cmp::Ordering::Less),
    }
}

/// Loose equality with type coercion.
///
/// A numeric string equals its number (`0 == "0"`, `"1e3" == "1000"`), booleans
/// and null compare by truthiness, and a non-numeric string only equals a number
/// when it is spelled exactly like that number. `0 == ""` is false.
pub fn equals(expected: &Value, actual: &Value) -> bool {
    loose_eq(expected, actual)
}

fn loose_eq(a: &Value, b: &Value) -> bool {
    use Value::*;

    match (a, b) {
        (Null, Null) => true,
        (Null, String(s)) | (String(s), Null) => s.is_empty(),
        (Bool(_) | Null, _) | (_, Bool(_) | Null) => a.is_truthy() == b.is_truthy(),

        (Int(x), Int(y)) => x == y,
        (Int(_) | Float(_), Int(_) | Float(_)) => number_eq(a, b),

        (Int(_) | Float(_), String(s)) | (String(s), Int(_) | Float(_)) => {
            let number = if matches!(a, String(_)) { b } else { a };
            match numeric_string(s) {
                Some(parsed) => number_eq(number, &parsed),
                None => number.coerce_to_string().as_deref() == Some(s.as_str()),
            }
        }

        (String(x), String(y)) => match (numeric_string(x), numeric_string(y)) {
            (Some(nx), Some(ny)) => number_eq(&nx, &ny),
            _ => x == y,
        },

        (List(_) | Map(_), List(_) | Map(_)) => {
            let left = a.entries();
            let right = b.entries();
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| b.entry(key).is_some_and(|other| loose_eq(value, other)))
        }

        _ => false,
    }
}

fn number_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => *x as f64 == *y,
        (Value::Float(x), Value::Float(y)) => x == y,
        _ => false,
    }
}

/// Numeric reading of a string for comparison purposes
fn numeric_string(s: &str) -> Option<Value> {
    if !NUMERIC_STRING_REGEX.is_match(s) {
        return None;
    }
    let s = s.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Int(i));
    }
    s.parse::<f64>().ok().map(Value::Float)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_range_validation() {
        let between = |n: Value, lo: Value, hi: Value| is_between(&n, &lo, &hi).unwrap();

        assert!(between(5.into(), 1.into(), 10.into()));
        assert!(between(1.into(), 1.into(), 10.into()));
        assert!(between(10.into(), 1.into(), 10.into()));
        assert!(!between(0.into(), 1.into(), 10.into()));
        assert!(!between(11.into(), 1.into(), 10.into()));

        assert!(between(18.5.into(), 18.into(), "19".into()));
        assert!(!between("17.9".into(), 18.0.into(), 100.into()));
    }

    #[test]
    fn test_range_exact_for_large_integers() {
        let max = Value::Int(i64::MAX);
        assert!(!is_between(&Value::Int(i64::MAX - 1), &max, &max).unwrap());
    }

    #[test]
    fn test_range_rejects_non_numbers() {
        assert!(is_between(&"abc".into(), &1.into(), &2.into()).is_err());
        assert!(is_between(&1.into(), &Value::Bool(true), &2.into()).is_err());
        assert!(is_between(&1.into(), &1.into(), &Value::Null).is_err());
    }

    #[test]
    fn test_loose_equality() {
        assert!(equals(&0.into(), &"0".into()));
        assert!(equals(&"1e3".into(), &"1000".into()));
        assert!(equals(&"01".into(), &1.into()));
        assert!(equals(&1.into(), &1.0.into()));
        assert!(equals(&Value::Null, &"".into()));
        assert!(equals(&Value::Null, &0.into()));
        assert!(equals(&Value::Bool(true), &"abc".into()));
        assert!(equals(&Value::Bool(false), &"0".into()));
        assert!(equals(&"abc".into(), &"abc".into()));

        assert!(!equals(&0.into(), &"".into()));
        assert!(!equals(&0.into(), &"a".into()));
        assert!(!equals(&Value::Null, &"0".into()));
        assert!(!equals(&"abc".into(), &"ABC".into()));
        assert!(!equals(&1.into(), &Value::List(vec![1.into()])));
    }

    #[test]
    fn test_array_equality() {
        let list = Value::from(vec![1, 2]);
        let mut map = BTreeMap::new();
        map.insert("0".to_string(), Value::from("1"));
        map.insert("1".to_string(), Value::from(2));

        assert!(equals(&list, &Value::Map(map)));
        assert!(!equals(&list, &Value::from(vec![2, 1])));
    }

    #[test]
    fn test_array_equality_is_symmetric_for_positions() {
        let list = Value::from(vec!["a", "b"]);
        let mut map = BTreeMap::new();
        map.insert("0".to_string(), Value::from("a"));
        map.insert("01".to_string(), Value::from("b"));
        let map = Value::Map(map);

        assert!(!equals(&map, &list));
        assert!(!equals(&list, &map));
    }
}
