//! Shapes shared by most responses.

use serde::{Deserialize, Serialize};

/// A link to another API document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLink {
    pub href: String,
}

/// The `_links` block present on every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: SelfLink,
}

/// A reference to another resource (realm, class, season, ...).
///
/// Depending on the resource any combination of the fields may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub key: Option<SelfLink>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub slug: Option<String>,
}
