//! The World of Warcraft API client.
//!
//! [`WowClient`] is configured once with a region, locale and
//! [`TokenProvider`], then exposes one typed method per operation (defined
//! alongside the descriptor tables in [`crate::endpoints`]) plus
//! [`WowClient::call`] for dispatch by [`Operation`].

mod executor;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::TokenProvider;
use crate::endpoints::{Operation, OperationParams, RequestSpec};
use crate::error::{ValidationError, WowError};
use crate::region::Region;
use crate::transport::{ReqwestTransport, Transport};

use executor::{RequestOptions, request_json};

/// How unsuccessful responses are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMapping {
    /// Every non-success status becomes
    /// [`RequestError::Failed`](crate::RequestError::Failed).
    #[default]
    Generic,
    /// Statuses are classified into [`ApiError`](crate::ApiError) kinds.
    ByStatus,
}

/// Client for the profile and game data APIs of one region.
///
/// Cloning is cheap; clones share the token provider and transport.
///
/// ## Examples
///
/// ```rust,ignore
/// use armory_lib::{CharacterParams, Region, WowClient};
/// use armory_lib::auth::StaticToken;
///
/// let client = WowClient::builder(Region::Eu, "en_GB")
///     .token_provider(StaticToken::new(token))
///     .build()?;
///
/// let profile = client
///     .get_character_profile(&CharacterParams::new("ravencrest", "thrall"))
///     .await?;
/// println!("{} is level {}", profile.name, profile.level);
/// ```
#[derive(Clone)]
pub struct WowClient {
    region: Region,
    locale: String,
    token_provider: Arc<dyn TokenProvider>,
    transport: Arc<dyn Transport>,
    error_mapping: ErrorMapping,
}

impl WowClient {
    /// Creates a builder for a client of the given region and locale.
    ///
    /// The locale (e.g. `en_GB`, `es_ES`) is sent verbatim.
    pub fn builder(region: Region, locale: impl Into<String>) -> WowClientBuilder {
        WowClientBuilder::new(region, locale.into())
    }

    /// Returns the region every request is sent to.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the locale sent with every request.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns how unsuccessful responses are reported.
    pub fn error_mapping(&self) -> ErrorMapping {
        self.error_mapping
    }

    /// Executes a resolved request and decodes the response into `T`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the token provider or transport fails, the
    /// response is unsuccessful, or the body does not decode into `T`.
    pub async fn request<T>(&self, spec: RequestSpec) -> Result<T, WowError>
    where
        T: DeserializeOwned,
    {
        request_json(RequestOptions {
            spec: &spec,
            region: self.region,
            locale: &self.locale,
            token_provider: self.token_provider.as_ref(),
            transport: self.transport.as_ref(),
            error_mapping: self.error_mapping,
        })
        .await
    }

    /// Executes an operation by name and returns the raw JSON body.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::MissingParameter`] before any request is
    /// made if `params` lacks something the operation needs; otherwise the
    /// same errors as [`WowClient::request`].
    pub async fn call(&self, op: Operation, params: &OperationParams) -> Result<Value, WowError> {
        let spec = op.request_spec(self.region, params)?;
        self.request(spec).await
    }
}

impl fmt::Debug for WowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WowClient")
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("error_mapping", &self.error_mapping)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`WowClient`].
pub struct WowClientBuilder {
    region: Region,
    locale: String,
    token_provider: Option<Arc<dyn TokenProvider>>,
    transport: Option<Arc<dyn Transport>>,
    error_mapping: ErrorMapping,
}

impl WowClientBuilder {
    fn new(region: Region, locale: String) -> Self {
        Self {
            region,
            locale,
            token_provider: None,
            transport: None,
            error_mapping: ErrorMapping::default(),
        }
    }

    /// Sets the source of bearer tokens. Required.
    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    /// Replaces the default `reqwest` transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Chooses how unsuccessful responses are reported.
    ///
    /// Defaults to [`ErrorMapping::Generic`].
    pub fn error_mapping(mut self, error_mapping: ErrorMapping) -> Self {
        self.error_mapping = error_mapping;
        self
    }

    /// Builds the [`WowClient`].
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::MissingTokenProvider`] if no token
    /// provider was set, or a [`RequestError`](crate::RequestError) if the default transport
    /// cannot be constructed.
    pub fn build(self) -> Result<WowClient, WowError> {
        let token_provider = self
            .token_provider
            .ok_or(ValidationError::MissingTokenProvider)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(WowClient {
            region: self.region,
            locale: self.locale,
            token_provider,
            transport,
            error_mapping: self.error_mapping,
        })
    }
}

impl fmt::Debug for WowClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WowClientBuilder")
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("has_token_provider", &self.token_provider.is_some())
            .field("error_mapping", &self.error_mapping)
            .finish_non_exhaustive()
    }
}
