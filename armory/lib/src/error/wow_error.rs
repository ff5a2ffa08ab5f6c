//! Top-level error type.

use super::{ApiError, AuthError, RequestError, ValidationError};
use thiserror::Error;

/// Top-level error type for all client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use armory_lib::WowError;
///
/// match client.get_character_profile(&params).await {
///     Ok(profile) => println!("{} ({})", profile.name, profile.level),
///     Err(WowError::Api(e)) if e.is_not_found() => println!("no such character"),
///     Err(e) => eprintln!("lookup failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum WowError {
    /// Construction or parameter errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport failures and unsuccessful responses.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Status-classified API failures.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Access token errors.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl WowError {
    /// Returns the HTTP status code behind this error, when known.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status()),
            Self::Request(e) => e.status_code(),
            Self::Auth(AuthError::TokenRequest { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for a 404 classified under status mapping.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }
}
