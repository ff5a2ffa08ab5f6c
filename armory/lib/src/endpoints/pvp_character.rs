//! Character PvP endpoints, in the `profile-{region}` namespace.

use super::RequestSpec;
use super::character::character_spec;
use crate::client::WowClient;
use crate::error::WowError;
use crate::region::Region;
use crate::types::{
    CharacterParams, CharacterPvpBracketParams, CharacterPvpBracketResponse,
    CharacterPvpSummaryResponse,
};

pub fn summary(region: Region, params: &CharacterParams) -> RequestSpec {
    character_spec(
        region,
        &params.realm_slug,
        &params.character_name,
        "/pvp-summary",
    )
}

/// The bracket is used verbatim; `3v3`, `rbg` and `shuffle-*` are typical.
pub fn bracket(region: Region, params: &CharacterPvpBracketParams) -> RequestSpec {
    character_spec(
        region,
        &params.realm_slug,
        &params.character_name,
        &format!("/pvp-bracket/{}", params.bracket),
    )
}

impl WowClient {
    /// Returns a character's PvP summary.
    pub async fn get_character_pvp_summary(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterPvpSummaryResponse, WowError> {
        self.request(summary(self.region(), params)).await
    }

    /// Returns a character's statistics for one PvP bracket.
    pub async fn get_character_pvp_bracket(
        &self,
        params: &CharacterPvpBracketParams,
    ) -> Result<CharacterPvpBracketResponse, WowError> {
        self.request(bracket(self.region(), params)).await
    }
}
