//! Typed client for the World of Warcraft profile and game data APIs.
//!
//! The `armory_lib` crate wraps the character profile, character PvP and
//! PvP season endpoints behind one async method per operation.
//!
//! ## Features
//!
//! - **Region-scoped client**: host and namespaces derive from a single [`Region`]
//! - **Pluggable auth**: any [`TokenProvider`](auth::TokenProvider), including
//!   a memoizing OAuth [`ClientCredentials`](auth::ClientCredentials) flow
//! - **Pluggable transport**: swap the default `reqwest` transport for tests
//!   or custom HTTP stacks
//! - **Dynamic dispatch**: every operation is also reachable by name via
//!   [`Operation`] and [`WowClient::call`]
//! - **Layered error handling**: structured errors for different failure modes
//!
//! ## Example
//!
//! ```rust,ignore
//! use armory_lib::{CharacterParams, Region, WowClient};
//! use armory_lib::auth::ClientCredentials;
//!
//! let client = WowClient::builder(Region::Eu, "en_GB")
//!     .token_provider(ClientCredentials::new(client_id, client_secret)?)
//!     .build()?;
//!
//! let media = client
//!     .get_character_media(&CharacterParams::new("ravencrest", "thrall"))
//!     .await?;
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod region;
pub mod testing;
pub mod transport;
pub mod types;
pub mod url;

// Re-exports for convenience
pub use client::{ErrorMapping, WowClient, WowClientBuilder};
pub use endpoints::{Operation, OperationParams, Parameter, RequestSpec};
pub use error::{ApiError, ApiErrorKind, AuthError, RequestError, ValidationError, WowError};
pub use region::{NamespaceKind, Region};
pub use types::*;
pub use url::build_api_url;
