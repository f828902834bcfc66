//! Contract violations
//!
//! A rule that returns `false` is a normal outcome. An [`Error`] means the caller
//! handed a predicate something outside its accepted input set.

use std::borrow::Cow;

/// Errors raised when a predicate is called with an argument it does not accept
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Wrong argument type or out-of-domain configuration value
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: Cow<'static, str>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Build an [`Error::InvalidArgument`], logging it at debug level.
pub(crate) fn invalid_argument(
    operation: &'static str,
    reason: impl Into<Cow<'static, str>>,
) -> Error {
    let reason = reason.into();
    tracing::debug!("Contract violation in {}: {}", operation, reason);
    Error::InvalidArgument { operation, reason }
}
