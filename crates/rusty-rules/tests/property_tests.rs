//! Property-based tests for rusty-rules.

use proptest::prelude::*;
use rusty_rules::{
    equals, is_between, is_blank, is_float, is_integer, is_number, is_valid_domain,
    is_valid_mysql_date, is_valid_mysql_timestamp, is_valid_slug, length_at_least,
    length_at_most, length_between, Value,
};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        ".{0,12}".prop_map(Value::String),
        "[+-]?[0-9]{0,6}(\\.[0-9]{0,3})?".prop_map(Value::String),
    ]
}

// ============================================================================
// LENGTH LAWS
// ============================================================================

proptest! {
    #[test]
    fn blank_iff_shorter_than_one(s in "[ \t\na-z\u{e7}]{0,8}") {
        let value = Value::from(s);
        prop_assert_eq!(is_blank(&value).unwrap(), !length_at_least(&value, 1).unwrap());
    }

    #[test]
    fn between_is_conjunction(s in ".{0,20}", min in 0usize..10, max in 0usize..20) {
        let value = Value::from(s);
        prop_assert_eq!(
            length_between(&value, min, max).unwrap(),
            length_at_least(&value, min).unwrap() && length_at_most(&value, max).unwrap()
        );
    }

    #[test]
    fn padding_does_not_change_length(s in "[a-z]{0,10}", pad in "[ \t\n]{0,4}") {
        let padded = Value::from(format!("{}{}{}", pad, s, pad));
        let len = s.chars().count();
        prop_assert!(length_between(&padded, len, len).unwrap());
    }
}

// ============================================================================
// NUMERIC LAWS
// ============================================================================

proptest! {
    #[test]
    fn number_is_integer_or_float(value in scalar()) {
        prop_assert_eq!(is_number(&value), is_integer(&value) || is_float(&value));
    }

    #[test]
    fn booleans_are_never_numbers(b in any::<bool>()) {
        let value = Value::Bool(b);
        prop_assert!(!is_integer(&value));
        prop_assert!(!is_float(&value));
        prop_assert!(!is_number(&value));
    }

    #[test]
    fn integer_strings_are_integers(n in any::<i64>()) {
        prop_assert!(is_integer(&Value::from(n.to_string())));
        prop_assert!(is_float(&Value::from(n.to_string())));
    }

    #[test]
    fn integer_equals_its_string(n in any::<i64>()) {
        prop_assert!(equals(&Value::Int(n), &Value::from(n.to_string())));
    }

    #[test]
    fn between_own_bounds(n in -1000i64..1000) {
        let v = Value::Int(n);
        prop_assert!(is_between(&v, &v, &v).unwrap());
    }
}

// ============================================================================
// ROUND TRIP
// ============================================================================

proptest! {
    #[test]
    fn formatted_dates_are_valid(y in 1000i32..9999, m in 1u32..=12, d in 1u32..=28) {
        let date = format!("{:04}-{:02}-{:02}", y, m, d);
        prop_assert!(is_valid_mysql_date(&Value::from(date)));
    }

    #[test]
    fn unpadded_months_are_invalid(y in 1000i32..9999, m in 1u32..=9, d in 10u32..=28) {
        let date = format!("{}-{}-{}", y, m, d);
        prop_assert!(!is_valid_mysql_date(&Value::from(date)));
    }

    #[test]
    fn predicates_are_deterministic(s in ".{0,30}") {
        let value = Value::from(s);
        prop_assert_eq!(is_valid_domain(&value), is_valid_domain(&value));
        prop_assert_eq!(is_valid_slug(&value), is_valid_slug(&value));
        prop_assert_eq!(is_valid_mysql_timestamp(&value), is_valid_mysql_timestamp(&value));
    }
}
