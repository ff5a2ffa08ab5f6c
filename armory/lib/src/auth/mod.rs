//! Bearer token providers.
//!
//! The client asks its [`TokenProvider`] for a token before every request
//! and never stores the result. Providers that want to avoid a token
//! exchange per request must memoize internally, as [`ClientCredentials`]
//! does.
//!
//! ## Examples
//!
//! ```rust
//! use armory_lib::auth::{StaticToken, TokenProvider, token_fn};
//!
//! let fixed = StaticToken::new("abc");
//! let dynamic = token_fn(|| async { Ok("abc".to_string()) });
//! # fn assert_provider(_: &dyn TokenProvider) {}
//! # assert_provider(&fixed);
//! # assert_provider(&dynamic);
//! ```

mod client_credentials;

pub use client_credentials::{ClientCredentials, DEFAULT_TOKEN_URL};

use std::fmt;
use std::sync::Arc;

use crate::error::AuthError;
use crate::transport::BoxFuture;

/// Supplies bearer tokens for API requests.
///
/// This trait is dyn-compatible; implementors must be `Send + Sync` so a
/// client can be shared across tasks.
pub trait TokenProvider: Send + Sync {
    /// Resolves to the bearer token for the next request.
    fn access_token(&self) -> BoxFuture<'_, Result<String, AuthError>>;
}

impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    fn access_token(&self) -> BoxFuture<'_, Result<String, AuthError>> {
        (**self).access_token()
    }
}

/// A provider that always yields the same token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> BoxFuture<'_, Result<String, AuthError>> {
        let token = self.0.clone();
        Box::pin(async move { Ok(token) })
    }
}

/// A provider backed by an async closure. Created with [`token_fn`].
#[derive(Clone)]
pub struct TokenFn<F>(F);

impl<F> fmt::Debug for TokenFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenFn").finish_non_exhaustive()
    }
}

impl<F, Fut> TokenProvider for TokenFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, AuthError>> + Send + 'static,
{
    fn access_token(&self) -> BoxFuture<'_, Result<String, AuthError>> {
        Box::pin((self.0)())
    }
}

/// Wraps an async closure as a [`TokenProvider`].
///
/// The closure runs on every request.
pub fn token_fn<F, Fut>(f: F) -> TokenFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, AuthError>> + Send + 'static,
{
    TokenFn(f)
}
