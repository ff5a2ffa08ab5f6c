//! Transport and response errors.

use thiserror::Error;

/// Errors from issuing a request or decoding its response.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The transport reported a non-success outcome.
    ///
    /// This is the only failure raised for unsuccessful responses under
    /// the default [`ErrorMapping::Generic`](crate::ErrorMapping::Generic)
    /// policy, whatever the underlying status.
    #[error("request failed: {path}")]
    Failed {
        /// The request path (without host or query string).
        path: String,
    },

    /// The default HTTP transport failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport failed to reach the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The response body did not match the requested shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// Returns `true` if this is the generic non-success failure.
    pub fn is_failed_response(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the HTTP status code if the transport error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
