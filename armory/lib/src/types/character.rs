//! Character profile response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Links, ResourceRef, SelfLink};

/// Response from the character profile summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterProfileResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub id: u64,
    pub name: String,
    pub gender: Option<ResourceRef>,
    pub faction: Option<ResourceRef>,
    pub race: Option<ResourceRef>,
    pub character_class: Option<ResourceRef>,
    pub active_spec: Option<ResourceRef>,
    pub realm: Option<ResourceRef>,
    pub guild: Option<ResourceRef>,
    pub level: u32,
    pub experience: Option<u64>,
    pub achievement_points: Option<u32>,
    pub achievements: Option<SelfLink>,
    pub titles: Option<SelfLink>,
    pub pvp_summary: Option<SelfLink>,
    pub encounters: Option<SelfLink>,
    pub media: Option<SelfLink>,
    pub specializations: Option<SelfLink>,
    pub statistics: Option<SelfLink>,
    pub mythic_keystone_profile: Option<SelfLink>,
    pub equipment: Option<SelfLink>,
    pub appearance: Option<SelfLink>,
    pub collections: Option<SelfLink>,
    pub professions: Option<SelfLink>,
    /// Milliseconds since the Unix epoch.
    pub last_login_timestamp: Option<u64>,
    pub average_item_level: Option<u32>,
    pub equipped_item_level: Option<u32>,
    pub covenant_progress: Option<SelfLink>,
}

/// Response from the character status endpoint.
///
/// `is_valid` turns false once a character is deleted, transferred or
/// renamed, even though the old profile may still resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterStatusResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub id: u64,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterAppearanceResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub playable_race: Option<ResourceRef>,
    pub playable_class: Option<ResourceRef>,
    pub active_spec: Option<ResourceRef>,
    pub gender: Option<ResourceRef>,
    pub faction: Option<ResourceRef>,
    pub guild_crest: Option<Value>,
    pub items: Option<Vec<Value>>,
    pub customizations: Option<Vec<Value>>,
}

/// One render of a character (avatar, inset, main-raw, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub key: Option<String>,
    pub value: Option<String>,
    pub file_data_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterMediaResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub assets: Option<Vec<MediaAsset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEquipmentResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub equipped_items: Option<Vec<Value>>,
    pub equipped_item_sets: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterProfessionsResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub primaries: Option<Vec<Value>>,
    pub secondaries: Option<Vec<Value>>,
}

/// Index of a character's encounter summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEncountersResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub dungeons: Option<SelfLink>,
    pub raids: Option<SelfLink>,
    pub expansions: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDungeonsResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub expansions: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRaidsResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub expansions: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterAchievementsResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub total_quantity: Option<u32>,
    pub total_points: Option<u32>,
    pub achievements: Option<Vec<Value>>,
    pub category_progress: Option<Vec<Value>>,
    pub recent_events: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterAchievementStatisticsResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub character: Option<ResourceRef>,
    pub categories: Option<Vec<Value>>,
}

/// Links to each of a character's collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCollectionsIndexResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub mounts: Option<SelfLink>,
    pub pets: Option<SelfLink>,
    pub toys: Option<SelfLink>,
    pub heirlooms: Option<SelfLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterMountsCollectionResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub mounts: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPetsCollectionResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub pets: Option<Vec<Value>>,
    pub unlocked_battle_pet_slots: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterToysCollectionResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub toys: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterHeirloomsCollectionResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub heirlooms: Option<Vec<Value>>,
}
