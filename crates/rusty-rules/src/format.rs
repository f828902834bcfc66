//! Slug, JSON and XML syntax checks

use serde::de::IgnoredAny;

use crate::string::str_length_between;
use crate::value::Value;

/// URL slug: 1..=100 characters from `A-Z a-z 0-9 _ -`
pub fn is_valid_slug(value: &Value) -> bool {
    let Value::String(slug) = value else {
        return false;
    };

    str_length_between(slug, 1, 100)
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Well-formed JSON text; any value kind is allowed at the top level.
pub fn is_valid_json_string(value: &Value) -> bool {
    let Value::String(json) = value else {
        return false;
    };

    match serde_json::from_str::<IgnoredAny>(json) {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!("Rejected JSON input: {}", e);
            false
        }
    }
}

/// Well-formed XML document with a single root element.
///
/// Scalars are coerced to strings; containers are never XML.
pub fn is_valid_xml_string(value: &Value) -> bool {
    let Some(xml) = value.coerce_to_string() else {
        return false;
    };

    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };

    match roxmltree::Document::parse_with_options(&xml, options) {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!("Rejected XML input: {}", e);
            false
        }
    }
}
