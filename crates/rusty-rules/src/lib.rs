//! Rusty-Rules
//!
//! Stateless input validation predicates. Every function here is pure: it judges a
//! value and never mutates, escapes or stores it.
//!
//! Two outcomes are kept apart:
//! - a well-typed value that breaks the rule yields `false`
//! - a caller passing the wrong kind of argument gets [`Error::InvalidArgument`]
//!
//! ```
//! use rusty_rules::{is_valid_slug, length_between, Value};
//!
//! assert!(is_valid_slug(&Value::from("abc_DEF-123")));
//! assert!(length_between(&Value::from("  hello  "), 1, 5).unwrap());
//! ```

pub mod collection;
pub mod comparison;
pub mod config;
pub mod email;
pub mod error;
pub mod format;
pub mod messages;
pub mod network;
pub mod numeric;
pub mod payment;
pub mod string;
pub mod temporal;
pub mod value;

// Re-export all validators
pub use collection::*;
pub use comparison::*;
pub use email::*;
pub use format::*;
pub use network::*;
pub use numeric::*;
pub use payment::*;
pub use string::*;
pub use temporal::*;

pub use config::{Config, PaymentConfig, TimezoneConfig};
pub use error::{Error, Result};
pub use messages::Message;
pub use value::Value;
