//! Client construction and parameter errors.

use thiserror::Error;

/// Errors raised before any request is attempted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The client was built without a token provider.
    #[error("tokenProvider is required")]
    MissingTokenProvider,

    /// A dynamically dispatched operation lacks one of its parameters.
    #[error("Operation {operation} requires parameter {parameter}")]
    MissingParameter {
        /// The operation being dispatched.
        operation: &'static str,
        /// The missing parameter name.
        parameter: &'static str,
    },
}
