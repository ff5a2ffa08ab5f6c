//! Test doubles for exercising a [`WowClient`](crate::WowClient) offline.
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use armory_lib::{Region, WowClient};
//! use armory_lib::auth::StaticToken;
//! use armory_lib::testing::RecordingTransport;
//!
//! let transport = Arc::new(RecordingTransport::ok(serde_json::json!({ "id": 38 })));
//! let client = WowClient::builder(Region::Eu, "en_GB")
//!     .token_provider(StaticToken::new("abc"))
//!     .transport(Arc::clone(&transport))
//!     .build()
//!     .unwrap();
//! # let _ = client;
//! assert!(transport.requests().is_empty());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::error::RequestError;
use crate::transport::{BoxFuture, Headers, Transport, TransportResponse};

/// A request captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Returns the value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A [`Transport`] that records requests and answers with a canned reply.
///
/// Every request gets the same status and body, or the same connection
/// failure when built with [`RecordingTransport::unreachable`]. The number
/// of times a body was decoded is tracked so tests can assert that failed
/// responses are never read.
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    body: Value,
    unreachable: Option<String>,
    requests: Mutex<Vec<RecordedRequest>>,
    decodes: Arc<AtomicUsize>,
}

impl RecordingTransport {
    /// Answers every request with `200` and `body`.
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// Answers every request with `status` and an empty JSON object.
    pub fn status(status: u16) -> Self {
        Self::new(status, Value::Object(Default::default()))
    }

    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            unreachable: None,
            requests: Mutex::new(Vec::new()),
            decodes: Default::default(),
        }
    }

    /// Fails every request with [`RequestError::Connection`].
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            unreachable: Some(message.into()),
            ..Self::status(503)
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().last().cloned()
    }

    /// How many response bodies have been decoded.
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }
}

impl Transport for RecordingTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a Headers,
    ) -> BoxFuture<'a, Result<Box<dyn TransportResponse>, RequestError>> {
        self.lock().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
        });

        if let Some(message) = &self.unreachable {
            let err = RequestError::Connection(message.clone());
            return Box::pin(async move { Err(err) });
        }

        let response = CannedResponse {
            status: self.status,
            body: self.body.clone(),
            decodes: Arc::clone(&self.decodes),
        };
        Box::pin(async move { Ok(Box::new(response) as Box<dyn TransportResponse>) })
    }
}

struct CannedResponse {
    status: u16,
    body: Value,
    decodes: Arc<AtomicUsize>,
}

impl TransportResponse for CannedResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn json(self: Box<Self>) -> BoxFuture<'static, Result<Value, RequestError>> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { Ok(self.body) })
    }
}
