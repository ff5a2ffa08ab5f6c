//! HTTP transport abstraction.
//!
//! The client never talks to the network directly. It hands the request URL
//! and headers to a [`Transport`], which returns a [`TransportResponse`]
//! whose body is decoded only when the client asks for it. The default
//! implementation, [`ReqwestTransport`], wraps a `reqwest::Client`.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::RequestError;

/// Boxed future type for async trait methods.
///
/// This type alias provides dyn-compatible async method returns.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Header name/value pairs sent with a request.
pub type Headers = [(String, String)];

/// User agent sent by [`ReqwestTransport`].
const USER_AGENT: &str = concat!("armory/", env!("CARGO_PKG_VERSION"));

/// Performs HTTP GET requests on behalf of the client.
///
/// This trait is dyn-compatible so a client can hold any transport behind an
/// `Arc`. Implementors decide on timeouts, proxies and retries; the client
/// issues exactly one `get` per operation.
pub trait Transport: Send + Sync {
    /// Sends a GET request to `url` with the given headers.
    ///
    /// ## Errors
    ///
    /// Returns an error only when no response was obtained at all. HTTP
    /// error statuses are reported through [`TransportResponse::is_success`].
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a Headers,
    ) -> BoxFuture<'a, Result<Box<dyn TransportResponse>, RequestError>>;
}

/// A response whose body has not been decoded yet.
pub trait TransportResponse: Send {
    /// Whether the response has a success (2xx) status.
    fn is_success(&self) -> bool;

    /// The HTTP status code.
    fn status(&self) -> u16;

    /// Consumes the response and decodes its body as JSON.
    fn json(self: Box<Self>) -> BoxFuture<'static, Result<Value, RequestError>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a Headers,
    ) -> BoxFuture<'a, Result<Box<dyn TransportResponse>, RequestError>> {
        (**self).get(url, headers)
    }
}

/// Default [`Transport`] backed by `reqwest`.
///
/// No timeout is configured unless one is requested with
/// [`ReqwestTransport::with_timeout`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh connection pool.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, RequestError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::from_client(client))
    }

    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::from_client(client))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a Headers,
    ) -> BoxFuture<'a, Result<Box<dyn TransportResponse>, RequestError>> {
        Box::pin(async move {
            let mut request = self.client.get(url);
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }

            let response = request.send().await?;
            Ok(Box::new(ReqwestResponse(response)) as Box<dyn TransportResponse>)
        })
    }
}

struct ReqwestResponse(reqwest::Response);

impl TransportResponse for ReqwestResponse {
    fn is_success(&self) -> bool {
        self.0.status().is_success()
    }

    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    fn json(self: Box<Self>) -> BoxFuture<'static, Result<Value, RequestError>> {
        Box::pin(async move {
            let body = self.0.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        })
    }
}
