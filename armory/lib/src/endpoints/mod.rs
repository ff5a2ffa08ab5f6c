//! Endpoint descriptor tables.
//!
//! Each table module provides pure descriptor functions that turn
//! parameters into a [`RequestSpec`], plus the typed [`WowClient`]
//! methods that execute them:
//!
//! - [`character`] - character profile, equipment, encounters, collections
//! - [`pvp_character`] - a character's PvP summary and brackets
//! - [`pvp_season`] - PvP seasons, leaderboards and rewards
//!
//! [`Operation`] names every operation for dynamic dispatch.
//!
//! [`WowClient`]: crate::WowClient

pub mod character;
mod operation;
pub mod pvp_character;
pub mod pvp_season;

pub use operation::{Operation, OperationParams, Parameter};

use crate::region::{NamespaceKind, Region};

/// A resolved request: the interpolated path and its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestSpec {
    /// Path below the API host, starting with `/`.
    pub path: String,
    /// Value of the `namespace` query parameter.
    pub namespace: String,
}

impl RequestSpec {
    /// Creates a spec in the `kind` namespace of `region`.
    pub fn new(path: impl Into<String>, region: Region, kind: NamespaceKind) -> Self {
        Self {
            path: path.into(),
            namespace: region.namespace(kind),
        }
    }
}
