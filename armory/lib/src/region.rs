//! API regions and the namespaces derived from them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One of the geographic API endpoints.
///
/// The lower-case code is used verbatim both in the host name
/// (`https://eu.api.blizzard.com`) and as the namespace suffix
/// (`profile-eu`).
///
/// ## Examples
///
/// ```
/// use armory_lib::Region;
///
/// let region: Region = "EU".parse().unwrap();
/// assert_eq!(region, Region::Eu);
/// assert_eq!(region.to_string(), "eu");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// North America, Latin America, Oceania.
    Us,
    /// Europe and Russia.
    Eu,
    /// Korea.
    Kr,
    /// Taiwan.
    Tw,
}

impl Region {
    /// Returns the lower-case region code.
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    /// Returns the namespace of the given kind for this region.
    pub fn namespace(&self, kind: NamespaceKind) -> String {
        format!("{kind}-{self}")
    }
}

/// Resource family a request belongs to.
///
/// Character data lives in the `profile` namespaces while season and
/// leaderboard data lives in the `dynamic` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NamespaceKind {
    Profile,
    Dynamic,
}
