//! Character profile endpoints.
//!
//! Every operation is a GET below
//! `/profile/wow/character/{realmSlug}/{characterName}` in the
//! `profile-{region}` namespace.

use super::RequestSpec;
use crate::client::WowClient;
use crate::error::WowError;
use crate::region::{NamespaceKind, Region};
use crate::types::{
    CharacterAchievementStatisticsResponse, CharacterAchievementsResponse,
    CharacterAppearanceResponse, CharacterCollectionsIndexResponse, CharacterDungeonsResponse,
    CharacterEncountersResponse, CharacterEquipmentResponse, CharacterHeirloomsCollectionResponse,
    CharacterMediaResponse, CharacterMountsCollectionResponse, CharacterParams,
    CharacterPetsCollectionResponse, CharacterProfessionsResponse, CharacterProfileResponse,
    CharacterRaidsResponse, CharacterStatusResponse, CharacterToysCollectionResponse,
};

const CHARACTER_ROOT: &str = "/profile/wow/character";

/// Builds a character-scoped spec. `suffix` is empty or starts with `/`.
pub(crate) fn character_spec(
    region: Region,
    realm_slug: &str,
    character_name: &str,
    suffix: &str,
) -> RequestSpec {
    RequestSpec::new(
        format!("{CHARACTER_ROOT}/{realm_slug}/{character_name}{suffix}"),
        region,
        NamespaceKind::Profile,
    )
}

fn spec(region: Region, params: &CharacterParams, suffix: &str) -> RequestSpec {
    character_spec(region, &params.realm_slug, &params.character_name, suffix)
}

pub fn profile(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "")
}

pub fn status(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/status")
}

pub fn appearance(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/appearance")
}

pub fn media(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/character-media")
}

pub fn equipment(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/equipment")
}

pub fn professions(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/professions")
}

pub fn encounters(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/encounters")
}

pub fn dungeons(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/encounters/dungeons")
}

pub fn raids(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/encounters/raids")
}

pub fn achievements(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/achievements")
}

pub fn achievement_statistics(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/achievements/statistics")
}

pub fn collections(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/collections")
}

pub fn mounts_collection(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/collections/mounts")
}

pub fn pets_collection(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/collections/pets")
}

pub fn toys_collection(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/collections/toys")
}

pub fn heirlooms_collection(region: Region, params: &CharacterParams) -> RequestSpec {
    spec(region, params, "/collections/heirlooms")
}

impl WowClient {
    /// Returns a character's profile summary.
    pub async fn get_character_profile(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterProfileResponse, WowError> {
        self.request(profile(self.region(), params)).await
    }

    /// Returns whether a character profile is still valid.
    pub async fn get_character_status(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterStatusResponse, WowError> {
        self.request(status(self.region(), params)).await
    }

    /// Returns a character's race, class, gender and customizations.
    pub async fn get_character_appearance(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterAppearanceResponse, WowError> {
        self.request(appearance(self.region(), params)).await
    }

    /// Returns the render URLs for a character.
    pub async fn get_character_media(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterMediaResponse, WowError> {
        self.request(media(self.region(), params)).await
    }

    /// Returns the items a character has equipped.
    pub async fn get_character_equipment(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterEquipmentResponse, WowError> {
        self.request(equipment(self.region(), params)).await
    }

    /// Returns a character's primary and secondary professions.
    pub async fn get_character_professions(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterProfessionsResponse, WowError> {
        self.request(professions(self.region(), params)).await
    }

    /// Returns the index of a character's dungeon and raid encounters.
    pub async fn get_character_encounters(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterEncountersResponse, WowError> {
        self.request(encounters(self.region(), params)).await
    }

    /// Returns a character's dungeon completions by expansion.
    pub async fn get_character_dungeons(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterDungeonsResponse, WowError> {
        self.request(dungeons(self.region(), params)).await
    }

    /// Returns a character's raid progress by expansion.
    pub async fn get_character_raids(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterRaidsResponse, WowError> {
        self.request(raids(self.region(), params)).await
    }

    /// Returns a character's completed achievements.
    pub async fn get_character_achievements(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterAchievementsResponse, WowError> {
        self.request(achievements(self.region(), params)).await
    }

    /// Returns a character's achievement statistics.
    pub async fn get_character_achievement_statistics(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterAchievementStatisticsResponse, WowError> {
        self.request(achievement_statistics(self.region(), params)).await
    }

    /// Returns links to each of a character's collections.
    pub async fn get_character_collections(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterCollectionsIndexResponse, WowError> {
        self.request(collections(self.region(), params)).await
    }

    /// Returns the mounts a character has collected.
    pub async fn get_character_mounts_collection(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterMountsCollectionResponse, WowError> {
        self.request(mounts_collection(self.region(), params)).await
    }

    /// Returns the battle pets a character has collected.
    pub async fn get_character_pets_collection(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterPetsCollectionResponse, WowError> {
        self.request(pets_collection(self.region(), params)).await
    }

    /// Returns the toys a character has collected.
    pub async fn get_character_toys_collection(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterToysCollectionResponse, WowError> {
        self.request(toys_collection(self.region(), params)).await
    }

    /// Returns the heirlooms a character has collected.
    pub async fn get_character_heirlooms_collection(
        &self,
        params: &CharacterParams,
    ) -> Result<CharacterHeirloomsCollectionResponse, WowError> {
        self.request(heirlooms_collection(self.region(), params)).await
    }
}
