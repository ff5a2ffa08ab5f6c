//! Named operations for dynamic dispatch.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{RequestSpec, character, pvp_character, pvp_season};
use crate::error::ValidationError;
use crate::region::{NamespaceKind, Region};
use crate::types::{
    CharacterParams, CharacterPvpBracketParams, PvpLeaderboardParams, PvpSeasonParams,
};

/// Every operation the client exposes.
///
/// The kebab-case name (`character-profile`, `pvp-leaderboard`, ...) is the
/// `Display`/`FromStr` form used by the command line.
///
/// ## Examples
///
/// ```
/// use armory_lib::{Operation, OperationParams, Region};
///
/// let op: Operation = "pvp-season".parse().unwrap();
/// let spec = op
///     .request_spec(Region::Us, &OperationParams::new().season(38))
///     .unwrap();
/// assert_eq!(spec.path, "/data/wow/pvp-season/38");
/// assert_eq!(spec.namespace, "dynamic-us");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    CharacterProfile,
    CharacterStatus,
    CharacterAppearance,
    CharacterMedia,
    CharacterEquipment,
    CharacterProfessions,
    CharacterEncounters,
    CharacterDungeons,
    CharacterRaids,
    CharacterAchievements,
    CharacterAchievementStatistics,
    CharacterCollections,
    CharacterMountsCollection,
    CharacterPetsCollection,
    CharacterToysCollection,
    CharacterHeirloomsCollection,
    CharacterPvpSummary,
    CharacterPvpBracket,
    PvpSeasonsIndex,
    PvpSeason,
    PvpLeaderboardsIndex,
    PvpLeaderboard,
    PvpRewardsIndex,
}

/// A parameter an [`Operation`] may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Parameter {
    Realm,
    Character,
    Bracket,
    Season,
}

impl Operation {
    /// The kebab-case operation name.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Namespace family the operation is served from.
    pub fn namespace_kind(&self) -> NamespaceKind {
        match self {
            Self::PvpSeasonsIndex
            | Self::PvpSeason
            | Self::PvpLeaderboardsIndex
            | Self::PvpLeaderboard
            | Self::PvpRewardsIndex => NamespaceKind::Dynamic,
            _ => NamespaceKind::Profile,
        }
    }

    /// Parameters that must be set for [`Operation::request_spec`] to succeed.
    pub fn required_parameters(&self) -> &'static [Parameter] {
        use Parameter::*;
        match self {
            Self::CharacterPvpBracket => &[Realm, Character, Bracket],
            Self::PvpSeasonsIndex => &[],
            Self::PvpSeason | Self::PvpLeaderboardsIndex | Self::PvpRewardsIndex => &[Season],
            Self::PvpLeaderboard => &[Season, Bracket],
            _ => &[Realm, Character],
        }
    }

    /// Resolves the request path and namespace for this operation.
    ///
    /// Parameters the operation does not use are ignored.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::MissingParameter`] naming the first
    /// required parameter that is unset.
    pub fn request_spec(
        &self,
        region: Region,
        params: &OperationParams,
    ) -> Result<RequestSpec, ValidationError> {
        let spec = match self {
            Self::CharacterProfile => character::profile(region, &params.character_params(*self)?),
            Self::CharacterStatus => character::status(region, &params.character_params(*self)?),
            Self::CharacterAppearance => {
                character::appearance(region, &params.character_params(*self)?)
            }
            Self::CharacterMedia => character::media(region, &params.character_params(*self)?),
            Self::CharacterEquipment => {
                character::equipment(region, &params.character_params(*self)?)
            }
            Self::CharacterProfessions => {
                character::professions(region, &params.character_params(*self)?)
            }
            Self::CharacterEncounters => {
                character::encounters(region, &params.character_params(*self)?)
            }
            Self::CharacterDungeons => {
                character::dungeons(region, &params.character_params(*self)?)
            }
            Self::CharacterRaids => character::raids(region, &params.character_params(*self)?),
            Self::CharacterAchievements => {
                character::achievements(region, &params.character_params(*self)?)
            }
            Self::CharacterAchievementStatistics => {
                character::achievement_statistics(region, &params.character_params(*self)?)
            }
            Self::CharacterCollections => {
                character::collections(region, &params.character_params(*self)?)
            }
            Self::CharacterMountsCollection => {
                character::mounts_collection(region, &params.character_params(*self)?)
            }
            Self::CharacterPetsCollection => {
                character::pets_collection(region, &params.character_params(*self)?)
            }
            Self::CharacterToysCollection => {
                character::toys_collection(region, &params.character_params(*self)?)
            }
            Self::CharacterHeirloomsCollection => {
                character::heirlooms_collection(region, &params.character_params(*self)?)
            }
            Self::CharacterPvpSummary => {
                pvp_character::summary(region, &params.character_params(*self)?)
            }
            Self::CharacterPvpBracket => {
                pvp_character::bracket(region, &params.bracket_params(*self)?)
            }
            Self::PvpSeasonsIndex => pvp_season::seasons_index(region),
            Self::PvpSeason => pvp_season::season(region, &params.season_params(*self)?),
            Self::PvpLeaderboardsIndex => {
                pvp_season::leaderboards_index(region, &params.season_params(*self)?)
            }
            Self::PvpLeaderboard => {
                pvp_season::leaderboard(region, &params.leaderboard_params(*self)?)
            }
            Self::PvpRewardsIndex => {
                pvp_season::rewards_index(region, &params.season_params(*self)?)
            }
        };
        Ok(spec)
    }
}

/// Loosely-typed parameters for [`Operation`] dispatch.
///
/// Each operation picks the fields it needs; the typed methods on
/// [`WowClient`](crate::WowClient) take the dedicated parameter structs
/// instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationParams {
    pub realm_slug: Option<String>,
    pub character_name: Option<String>,
    pub bracket: Option<String>,
    pub season_id: Option<i64>,
}

impl OperationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn realm(mut self, realm_slug: impl Into<String>) -> Self {
        self.realm_slug = Some(realm_slug.into());
        self
    }

    pub fn character_name(mut self, character_name: impl Into<String>) -> Self {
        self.character_name = Some(character_name.into());
        self
    }

    pub fn bracket(mut self, bracket: impl Into<String>) -> Self {
        self.bracket = Some(bracket.into());
        self
    }

    pub fn season(mut self, season_id: i64) -> Self {
        self.season_id = Some(season_id);
        self
    }

    fn require<T: Clone>(
        value: &Option<T>,
        op: Operation,
        parameter: Parameter,
    ) -> Result<T, ValidationError> {
        value.clone().ok_or(ValidationError::MissingParameter {
            operation: op.name(),
            parameter: parameter.into(),
        })
    }

    fn character_params(&self, op: Operation) -> Result<CharacterParams, ValidationError> {
        Ok(CharacterParams::new(
            Self::require(&self.realm_slug, op, Parameter::Realm)?,
            Self::require(&self.character_name, op, Parameter::Character)?,
        ))
    }

    fn bracket_params(&self, op: Operation) -> Result<CharacterPvpBracketParams, ValidationError> {
        let character = self.character_params(op)?;
        let bracket = Self::require(&self.bracket, op, Parameter::Bracket)?;
        Ok(character.with_bracket(bracket))
    }

    fn season_params(&self, op: Operation) -> Result<PvpSeasonParams, ValidationError> {
        Self::require(&self.season_id, op, Parameter::Season).map(PvpSeasonParams::new)
    }

    fn leaderboard_params(&self, op: Operation) -> Result<PvpLeaderboardParams, ValidationError> {
        let season = self.season_params(op)?;
        let bracket = Self::require(&self.bracket, op, Parameter::Bracket)?;
        Ok(season.with_bracket(bracket))
    }
}
