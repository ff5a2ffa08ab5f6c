//! Request execution with tracing instrumentation.

use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument, warn};

use super::ErrorMapping;
use crate::auth::TokenProvider;
use crate::endpoints::RequestSpec;
use crate::error::{ApiError, RequestError, WowError};
use crate::region::Region;
use crate::transport::Transport;
use crate::url::build_api_url;

/// Everything needed to execute one request.
pub(crate) struct RequestOptions<'a> {
    pub spec: &'a RequestSpec,
    pub region: Region,
    pub locale: &'a str,
    pub token_provider: &'a dyn TokenProvider,
    pub transport: &'a dyn Transport,
    pub error_mapping: ErrorMapping,
}

/// Executes a GET request and decodes the JSON body into `T`.
///
/// A fresh token is requested from the provider on every call. The body of
/// an unsuccessful response is never read.
///
/// ## Errors
///
/// Returns an error if:
/// - The token provider fails
/// - The transport cannot obtain a response
/// - The response status is not a success
/// - The body is not JSON of the expected shape
#[instrument(
    name = "wow_request",
    skip(opts),
    fields(
        http.method = "GET",
        http.url = tracing::field::Empty,
        http.status_code = tracing::field::Empty,
        wow.namespace = %opts.spec.namespace,
        otel.kind = "client",
        otel.status_code = tracing::field::Empty,
    )
)]
pub(crate) async fn request_json<T>(opts: RequestOptions<'_>) -> Result<T, WowError>
where
    T: DeserializeOwned,
{
    let token = opts.token_provider.access_token().await?;

    let url = build_api_url(
        opts.region,
        &opts.spec.path,
        &opts.spec.namespace,
        opts.locale,
    );
    Span::current().record("http.url", url.as_str());

    let headers = [("Authorization".to_string(), format!("Bearer {token}"))];
    let response = opts.transport.get(&url, &headers).await?;

    let status = response.status();
    Span::current().record("http.status_code", status);

    if !response.is_success() {
        let otel_status = if status >= 500 { "ERROR" } else { "UNSET" };
        Span::current().record("otel.status_code", otel_status);
        warn!(path = %opts.spec.path, "Request failed");

        return Err(match opts.error_mapping {
            ErrorMapping::Generic => RequestError::Failed {
                path: opts.spec.path.clone(),
            }
            .into(),
            ErrorMapping::ByStatus => ApiError::from_status(status, opts.spec.path.clone()).into(),
        });
    }

    Span::current().record("otel.status_code", "OK");

    let body = response.json().await?;
    let parsed = serde_json::from_value(body).map_err(RequestError::Decode)?;
    debug!("Decoded response");

    Ok(parsed)
}
