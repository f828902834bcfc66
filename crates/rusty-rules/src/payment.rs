//! Payment card field validation functions
//!
//! Format checks only; no Luhn checksum, no issuer lookup, no processor calls.
//! Every rule trims its input and rejects non-strings with `false`.

use crate::string::{str_length_between, trim};
use crate::value::Value;

fn trimmed(value: &Value) -> Option<&str> {
    value.as_str().map(trim)
}

fn all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// 14 to 20 digits, no separators
pub fn is_valid_card_number(value: &Value) -> bool {
    trimmed(value).is_some_and(|number| all_digits(number) && str_length_between(number, 14, 20))
}

/// Two digits, `01` through `12`
pub fn is_valid_card_expiry_month(value: &Value) -> bool {
    let Some(month) = trimmed(value) else {
        return false;
    };

    if !str_length_between(month, 2, 2) || !all_digits(month) {
        return false;
    }

    month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// Exactly `year_length` digits, not all zero
pub fn is_valid_card_expiry_year(value: &Value, year_length: usize) -> bool {
    let Some(year) = trimmed(value) else {
        return false;
    };

    str_length_between(year, year_length, year_length)
        && all_digits(year)
        && year.chars().any(|c| c != '0')
}

/// 1 to 512 characters
pub fn is_valid_cardholder_name(value: &Value) -> bool {
    trimmed(value).is_some_and(|name| str_length_between(name, 1, 512))
}

/// 3 or 4 digits
pub fn is_valid_card_cvc(value: &Value) -> bool {
    trimmed(value).is_some_and(|cvc| str_length_between(cvc, 3, 4) && all_digits(cvc))
}
