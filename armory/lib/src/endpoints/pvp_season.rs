//! PvP season endpoints, in the `dynamic-{region}` namespace.

use super::RequestSpec;
use crate::client::WowClient;
use crate::error::WowError;
use crate::region::{NamespaceKind, Region};
use crate::types::{
    PvpLeaderboardParams, PvpLeaderboardResponse, PvpLeaderboardsIndexResponse,
    PvpRewardsIndexResponse, PvpSeasonParams, PvpSeasonResponse, PvpSeasonsIndexResponse,
};

const SEASON_ROOT: &str = "/data/wow/pvp-season";

fn spec(region: Region, path: String) -> RequestSpec {
    RequestSpec::new(path, region, NamespaceKind::Dynamic)
}

pub fn seasons_index(region: Region) -> RequestSpec {
    spec(region, format!("{SEASON_ROOT}/index"))
}

pub fn season(region: Region, params: &PvpSeasonParams) -> RequestSpec {
    spec(region, format!("{SEASON_ROOT}/{}", params.season_id))
}

pub fn leaderboards_index(region: Region, params: &PvpSeasonParams) -> RequestSpec {
    spec(
        region,
        format!("{SEASON_ROOT}/{}/pvp-leaderboard/index", params.season_id),
    )
}

pub fn leaderboard(region: Region, params: &PvpLeaderboardParams) -> RequestSpec {
    spec(
        region,
        format!(
            "{SEASON_ROOT}/{}/pvp-leaderboard/{}",
            params.season_id, params.bracket
        ),
    )
}

pub fn rewards_index(region: Region, params: &PvpSeasonParams) -> RequestSpec {
    spec(
        region,
        format!("{SEASON_ROOT}/{}/pvp-reward/index", params.season_id),
    )
}

impl WowClient {
    /// Returns the index of PvP seasons.
    pub async fn get_pvp_seasons_index(&self) -> Result<PvpSeasonsIndexResponse, WowError> {
        self.request(seasons_index(self.region())).await
    }

    /// Returns one PvP season.
    pub async fn get_pvp_season(
        &self,
        params: &PvpSeasonParams,
    ) -> Result<PvpSeasonResponse, WowError> {
        self.request(season(self.region(), params)).await
    }

    /// Returns the leaderboards available for a PvP season.
    pub async fn get_pvp_leaderboards_index(
        &self,
        params: &PvpSeasonParams,
    ) -> Result<PvpLeaderboardsIndexResponse, WowError> {
        self.request(leaderboards_index(self.region(), params)).await
    }

    /// Returns one bracket's leaderboard for a season.
    pub async fn get_pvp_leaderboard(
        &self,
        params: &PvpLeaderboardParams,
    ) -> Result<PvpLeaderboardResponse, WowError> {
        self.request(leaderboard(self.region(), params)).await
    }

    /// Returns the rewards of a PvP season.
    pub async fn get_pvp_rewards_index(
        &self,
        params: &PvpSeasonParams,
    ) -> Result<PvpRewardsIndexResponse, WowError> {
        self.request(rewards_index(self.region(), params)).await
    }
}
