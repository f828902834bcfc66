//! Host and address syntax checks
//!
//! Offline only: no DNS resolution, no reachability checks.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::str_length_between;
use crate::value::Value;

// Anchored at the start only: labels, optional :port, optional trailing slash
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([A-Z0-9][A-Z0-9_-]*(?:\.[A-Z0-9][A-Z0-9_-]*)+):?(\d+)?/?").unwrap()
});

/// Host-name check for values like `example.com`, `www.example.com:8080/`.
///
/// Subdomains are accepted (`images.google.com`). A URI scheme is not:
/// `http://example.com` fails because `http:` is not a label. The trimmed
/// length must be 4..=100, `a.co` being the shortest real domain.
pub fn is_valid_domain(value: &Value) -> bool {
    let Value::String(domain) = value else {
        return false;
    };

    if !str_length_between(domain, 4, 100) {
        return false;
    }

    DOMAIN_REGEX.is_match(domain)
}

/// IPv4 or IPv6 address syntax. Scalars are coerced to strings first.
pub fn is_valid_ip_address(value: &Value) -> bool {
    value
        .coerce_to_string()
        .is_some_and(|s| s.parse::<IpAddr>().is_ok())
}
