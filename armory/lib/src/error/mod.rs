//! Layered error types for the client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`WowError`] - Top-level error type returned by every operation
//! - [`ValidationError`] - Client construction and parameter errors
//! - [`RequestError`] - Transport failures and the generic request failure
//! - [`ApiError`] - Status-specific API failures (not found, auth, rate limit)
//! - [`AuthError`] - Access token acquisition errors

mod api_error;
mod auth_error;
mod request_error;
mod validation_error;
mod wow_error;

pub use api_error::{ApiError, ApiErrorKind};
pub use auth_error::AuthError;
pub use request_error::RequestError;
pub use validation_error::ValidationError;
pub use wow_error::WowError;
