//! Request parameters and typed response shapes.
//!
//! Response structs mirror the upstream JSON. Most fields are optional
//! because the API omits them freely; open-ended records are kept as
//! [`serde_json::Value`]. Unknown fields are ignored.

mod character;
mod common;
mod params;
mod pvp;

pub use character::{
    CharacterAchievementStatisticsResponse, CharacterAchievementsResponse,
    CharacterAppearanceResponse, CharacterCollectionsIndexResponse, CharacterDungeonsResponse,
    CharacterEncountersResponse, CharacterEquipmentResponse, CharacterHeirloomsCollectionResponse,
    CharacterMediaResponse, CharacterMountsCollectionResponse, CharacterPetsCollectionResponse,
    CharacterProfessionsResponse, CharacterProfileResponse, CharacterRaidsResponse,
    CharacterStatusResponse, CharacterToysCollectionResponse, MediaAsset,
};
pub use common::{Links, ResourceRef, SelfLink};
pub use params::{CharacterParams, CharacterPvpBracketParams, PvpLeaderboardParams, PvpSeasonParams};
pub use pvp::{
    CharacterPvpBracketResponse, CharacterPvpSummaryResponse, PvpLeaderboardResponse,
    PvpLeaderboardsIndexResponse, PvpRewardsIndexResponse, PvpSeasonResponse,
    PvpSeasonsIndexResponse,
};
