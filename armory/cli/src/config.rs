//! Credential resolution and CLI errors.

use armory_lib::auth::ClientCredentials;
use armory_lib::{AuthError, WowError};
use thiserror::Error;

/// Errors surfaced by the `armory` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Wow(#[from] WowError),

    #[error("Failed to render response: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<AuthError> for CliError {
    fn from(err: AuthError) -> Self {
        Self::Wow(err.into())
    }
}

/// Builds a client-credentials provider from flag or environment values.
///
/// ## Errors
///
/// Returns [`AuthError::MissingCredential`] naming the environment variable
/// when a value is absent or blank.
pub fn credentials(
    client_id: Option<&str>,
    client_secret: Option<&str>,
) -> Result<ClientCredentials, AuthError> {
    let client_id = require(client_id, "BLIZZARD_CLIENT_ID")?;
    let client_secret = require(client_secret, "BLIZZARD_CLIENT_SECRET")?;
    ClientCredentials::new(client_id, client_secret)
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, AuthError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AuthError::MissingCredential {
            name: name.to_string(),
        })
}
