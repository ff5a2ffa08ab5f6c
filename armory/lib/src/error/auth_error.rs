//! Access token acquisition errors.

use thiserror::Error;

/// Errors raised while obtaining a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential needed for the token exchange is missing.
    #[error("Missing credential: {name}")]
    MissingCredential {
        /// The credential name (usually the environment variable).
        name: String,
    },

    /// The token endpoint answered with a non-success status.
    #[error("Token request failed: HTTP {status}: {message}")]
    TokenRequest {
        /// The HTTP status code returned.
        status: u16,
        /// Response body from the token endpoint.
        message: String,
    },

    /// The token endpoint reply had no `access_token`.
    #[error("Token response did not include access_token")]
    MissingAccessToken,

    /// The token exchange could not be performed.
    #[error("Token request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A caller-supplied token provider failed.
    #[error("Token provider failed: {0}")]
    Provider(String),
}

impl AuthError {
    /// Creates an error for a failing caller-supplied provider.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let err = AuthError::MissingCredential {
            name: "BLIZZARD_CLIENT_ID".to_string(),
        };
        assert_eq!(err.to_string(), "Missing credential: BLIZZARD_CLIENT_ID");
    }

    #[test]
    fn test_token_request_display() {
        let err = AuthError::TokenRequest {
            status: 401,
            message: "invalid_client".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Token request failed: HTTP 401: invalid_client"
        );
    }

    #[test]
    fn test_provider_helper() {
        let err = AuthError::provider("vault unavailable");
        assert!(matches!(err, AuthError::Provider(ref m) if m == "vault unavailable"));
    }
}
