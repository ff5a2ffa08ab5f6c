//! OAuth client-credentials token provider.

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::TokenProvider;
use crate::error::AuthError;
use crate::transport::BoxFuture;

/// Battle.net OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth.battle.net/token";

/// Tokens are refreshed this long before the server says they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
}

struct CachedToken {
    token: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Exchanges an application's client id and secret for an access token.
///
/// The token is memoized and reused until shortly before it expires.
/// Concurrent callers wait for a single in-flight exchange instead of each
/// starting their own.
///
/// ## Examples
///
/// ```rust,ignore
/// use armory_lib::{Region, WowClient};
/// use armory_lib::auth::ClientCredentials;
///
/// let credentials = ClientCredentials::new(client_id, client_secret)?;
/// let client = WowClient::builder(Region::Eu, "en_GB")
///     .token_provider(credentials)
///     .build()?;
/// ```
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    token_url: String,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ClientCredentials {
    /// Creates a provider for the given application credentials.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if either value is blank,
    /// or an HTTP error if the client cannot be constructed.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(AuthError::MissingCredential {
                name: "client_id".to_string(),
            });
        }
        if client_secret.trim().is_empty() {
            return Err(AuthError::MissingCredential {
                name: "client_secret".to_string(),
            });
        }

        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            client_id,
            client_secret,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            http,
            cached: Mutex::new(None),
        })
    }

    /// Overrides the token endpoint URL.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Returns the token endpoint URL.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Drops the memoized token so the next call performs a new exchange.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    #[instrument(name = "oauth_token", skip(self), fields(http.url = %self.token_url))]
    async fn exchange(&self) -> Result<CachedToken, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            warn!(http.status_code = status.as_u16(), "Token request rejected");
            return Err(AuthError::TokenRequest {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = response.json().await?;
        let token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingAccessToken)?;
        let expires_at = body.expires_in.and_then(expiry_deadline);

        debug!(expires_in = ?body.expires_in, "Obtained access token");
        Ok(CachedToken { token, expires_at })
    }
}

/// When a token valid for `expires_in` seconds should be replaced.
///
/// Lifetimes too large to represent are treated as never expiring.
fn expiry_deadline(expires_in: u64) -> Option<Instant> {
    Instant::now().checked_add(Duration::from_secs(expires_in).saturating_sub(EXPIRY_MARGIN))
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

impl TokenProvider for ClientCredentials {
    fn access_token(&self) -> BoxFuture<'_, Result<String, AuthError>> {
        Box::pin(async move {
            let mut cached = self.cached.lock().await;

            if let Some(current) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
                return Ok(current.token.clone());
            }

            let fresh = self.exchange().await?;
            let token = fresh.token.clone();
            *cached = Some(fresh);
            Ok(token)
        })
    }
}
