//! Operation parameters.
//!
//! Values are interpolated into request paths exactly as given: realm slugs
//! and character names are not lower-cased or percent-encoded, brackets are
//! not checked against the known formats, and season ids are not checked
//! for positivity.

use serde::{Deserialize, Serialize};

/// Identifies a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterParams {
    /// Realm slug, e.g. `ravencrest`.
    pub realm_slug: String,
    /// Character name, lower case as the API expects.
    pub character_name: String,
}

impl CharacterParams {
    pub fn new(realm_slug: impl Into<String>, character_name: impl Into<String>) -> Self {
        Self {
            realm_slug: realm_slug.into(),
            character_name: character_name.into(),
        }
    }

    /// Adds a PvP bracket, e.g. `3v3` or `shuffle-mage-frost`.
    pub fn with_bracket(self, bracket: impl Into<String>) -> CharacterPvpBracketParams {
        CharacterPvpBracketParams {
            realm_slug: self.realm_slug,
            character_name: self.character_name,
            bracket: bracket.into(),
        }
    }
}

/// Identifies one PvP bracket of a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterPvpBracketParams {
    pub realm_slug: String,
    pub character_name: String,
    pub bracket: String,
}

impl CharacterPvpBracketParams {
    pub fn new(
        realm_slug: impl Into<String>,
        character_name: impl Into<String>,
        bracket: impl Into<String>,
    ) -> Self {
        Self {
            realm_slug: realm_slug.into(),
            character_name: character_name.into(),
            bracket: bracket.into(),
        }
    }
}

/// Identifies a PvP season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PvpSeasonParams {
    pub season_id: i64,
}

impl PvpSeasonParams {
    pub fn new(season_id: i64) -> Self {
        Self { season_id }
    }

    /// Adds a leaderboard bracket, e.g. `3v3`.
    pub fn with_bracket(self, bracket: impl Into<String>) -> PvpLeaderboardParams {
        PvpLeaderboardParams {
            season_id: self.season_id,
            bracket: bracket.into(),
        }
    }
}

/// Identifies one leaderboard of a PvP season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PvpLeaderboardParams {
    pub season_id: i64,
    pub bracket: String,
}

impl PvpLeaderboardParams {
    pub fn new(season_id: i64, bracket: impl Into<String>) -> Self {
        Self {
            season_id,
            bracket: bracket.into(),
        }
    }
}
