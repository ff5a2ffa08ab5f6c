//! Status-specific API errors.

use std::fmt;

use thiserror::Error;

/// Category of an unsuccessful API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 404: the character, realm, season or bracket does not exist.
    NotFound,
    /// 401 or 403: the access token was rejected.
    Auth,
    /// 429: the client exceeded its request quota.
    RateLimit,
    /// Any other non-success status.
    Other,
}

impl ApiErrorKind {
    /// Classifies an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::Auth,
            429 => Self::RateLimit,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not found",
            Self::Auth => "not authorized",
            Self::RateLimit => "rate limited",
            Self::Other => "API error",
        };
        f.write_str(label)
    }
}

/// An unsuccessful response, classified by status.
///
/// Only produced when the client is built with
/// [`ErrorMapping::ByStatus`](crate::ErrorMapping::ByStatus).
///
/// ## Examples
///
/// ```
/// use armory_lib::{ApiError, ApiErrorKind};
///
/// let err = ApiError::from_status(404, "/x");
/// assert_eq!(err.kind(), ApiErrorKind::NotFound);
/// assert_eq!(err.status(), 404);
/// ```
#[derive(Debug, Clone, Error)]
#[error("{kind} (HTTP {status}): {path}")]
pub struct ApiError {
    kind: ApiErrorKind,
    status: u16,
    path: String,
}

impl ApiError {
    /// Creates an error for the given status and request path.
    pub fn from_status(status: u16, path: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    pub fn is_auth(&self) -> bool {
        self.kind == ApiErrorKind::Auth
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == ApiErrorKind::RateLimit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_status() {
        let err = ApiError::from_status(404, "/x");
        assert_eq!(err.status(), 404);
        assert_eq!(err.path(), "/x");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Auth);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Auth);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimit);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Other);
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Other);
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_status(429, "/profile/wow/character/a/b");
        assert_eq!(
            err.to_string(),
            "rate limited (HTTP 429): /profile/wow/character/a/b"
        );
        assert!(err.is_rate_limited());
        assert!(!err.is_auth());
    }
}
