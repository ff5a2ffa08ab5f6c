//! PvP response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Links, ResourceRef, SelfLink};

/// A character's PvP overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPvpSummaryResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub honor_level: Option<u32>,
    pub honorable_kills: Option<u32>,
    pub pvp_map_statistics: Option<Vec<Value>>,
    /// Links to each bracket the character has played.
    pub brackets: Option<Vec<SelfLink>>,
}

/// A character's standing in one PvP bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPvpBracketResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub faction: Option<Value>,
    pub bracket: Option<Value>,
    pub rating: Option<u32>,
    pub season: Option<ResourceRef>,
    pub tier: Option<ResourceRef>,
    pub weekly_match_statistics: Option<Value>,
    pub season_match_statistics: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvpSeasonsIndexResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub seasons: Option<Vec<ResourceRef>>,
    pub current_season: Option<ResourceRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvpSeasonResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub id: i64,
    /// Milliseconds since the Unix epoch.
    pub season_start_timestamp: Option<u64>,
    /// Milliseconds since the Unix epoch; absent while the season runs.
    pub season_end_timestamp: Option<u64>,
    pub season_name: Option<String>,
    pub pvp_region: Option<ResourceRef>,
    pub leaderboards: Option<SelfLink>,
    pub rewards: Option<SelfLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvpLeaderboardsIndexResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub season: Option<ResourceRef>,
    pub leaderboards: Option<Vec<ResourceRef>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvpLeaderboardResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub season: Option<ResourceRef>,
    pub name: Option<String>,
    pub bracket: Option<Value>,
    pub entries: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvpRewardsIndexResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub season: Option<ResourceRef>,
    pub rewards: Option<Vec<Value>>,
}
