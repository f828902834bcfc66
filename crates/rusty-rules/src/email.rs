//! Email validation functions
//!
//! Practical address syntax, not the full RFC 5322 grammar: no quoted local parts,
//! no comments, no folding whitespace. Purely offline; nothing is resolved or sent.

use std::net::{Ipv4Addr, Ipv6Addr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{invalid_argument, Result};
use crate::value::Value;

const MAX_LOCAL_LENGTH: usize = 64;
const MAX_EMAIL_LENGTH: usize = 320;

// Dot-atom local part
static LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$").unwrap()
});

// Two or more labels; the last one starts with a letter
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z](?:[a-z0-9-]{0,61}[a-z0-9])?$",
    )
    .unwrap()
});

/// Validates email format.
///
/// Only strings are accepted; anything else is a contract violation.
pub fn is_valid_email(value: &Value) -> Result<bool> {
    match value {
        Value::String(email) => Ok(check_email(email)),
        other => Err(invalid_argument(
            "is_valid_email",
            format!("email must be a string, got {}", other.type_name()),
        )),
    }
}

fn check_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    // The local part cannot contain '@', so the last one splits
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_LENGTH || !LOCAL_REGEX.is_match(local) {
        return false;
    }

    match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        Some(literal) => is_address_literal(literal),
        None => DOMAIN_REGEX.is_match(domain),
    }
}

/// `[192.0.2.1]` or `[IPv6:2001:db8::1]`
fn is_address_literal(literal: &str) -> bool {
    match literal.strip_prefix("IPv6:") {
        Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
        None => literal.parse::<Ipv4Addr>().is_ok(),
    }
}
