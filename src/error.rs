use thiserror::Error;

use crate::api::ApiError;

/// Client-detected precondition violation.
///
/// Reported before any network call is attempted; never retried. The fix is
/// always to correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Session key {0} is inactive")]
    InactiveKey(u64),

    #[error("No session key with id {0} in the current listing")]
    UnknownKey(u64),

    #[error("Expiration instant must be strictly in the future")]
    ExpirationInPast,

    #[error("Isolation label must not be empty")]
    EmptyIsolationLabel,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Error surface for controller operations.
///
/// Validation failures never reach the network; remote failures carry the
/// underlying message and are never retried by the library itself.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
