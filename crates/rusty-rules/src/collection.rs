//! Mapping and id-list validation functions

use crate::error::{invalid_argument, Result};
use crate::numeric::parse_integer;
use crate::string::trim;
use crate::value::Value;

/// True when every key in `keys` is present in `mapping`.
///
/// Presence only: a key mapped to null or "" still counts. `keys` may be a list,
/// or a map whose values are the keys to look for.
pub fn has_keys(mapping: &Value, keys: &Value) -> Result<bool> {
    if !mapping.is_container() {
        return Err(invalid_argument(
            "has_keys",
            format!("first parameter must be an array, got {}", mapping.type_name()),
        ));
    }
    if !keys.is_container() {
        return Err(invalid_argument(
            "has_keys",
            format!("keys parameter must be an array, got {}", keys.type_name()),
        ));
    }

    for (_, key) in keys.entries() {
        let key = key.as_key().ok_or_else(|| {
            invalid_argument(
                "has_keys",
                format!("a {} cannot be used as a key", key.type_name()),
            )
        })?;
        if mapping.entry(&key).is_none() {
            return Ok(false);
        }
    }

    Ok(true)
}

/// True when `key` is present in `mapping` with a non-blank value.
///
/// A null value counts as absent. Nested arrays count as non-blank.
pub fn has_non_blank_key(key: &Value, mapping: &Value) -> Result<bool> {
    if !mapping.is_container() {
        return Err(invalid_argument(
            "has_non_blank_key",
            format!("data parameter must be an array, got {}", mapping.type_name()),
        ));
    }
    let Value::String(key) = key else {
        return Err(invalid_argument(
            "has_non_blank_key",
            format!("key must be a string, got {}", key.type_name()),
        ));
    };

    Ok(match mapping.entry(key) {
        None | Some(Value::Null) => false,
        Some(value) => match value.coerce_to_string() {
            Some(s) => !trim(&s).is_empty(),
            None => true,
        },
    })
}

/// Comma-separated list of positive integer ids, e.g. `"3,15,42"`.
///
/// A blank string is an empty list and passes. Empty segments (`"1,,2"`, `"1,"`)
/// fail, as do zero and negative ids.
pub fn is_valid_comma_separated_ids(value: &Value) -> Result<bool> {
    let Value::String(ids) = value else {
        return Err(invalid_argument(
            "is_valid_comma_separated_ids",
            format!("ids parameter must be a string, got {}", value.type_name()),
        ));
    };

    if trim(ids).is_empty() {
        return Ok(true);
    }

    Ok(ids
        .split(',')
        .all(|segment| parse_integer(segment).is_some_and(|id| id > 0)))
}
