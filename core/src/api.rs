//! Async request dispatcher.
//!
//! # Design
//! `HypixelApi` pairs the stateless [`HypixelClient`] with a shared
//! [`Transport`]. Every endpoint method builds its request, awaits the
//! transport exactly once and runs the response through the same pipeline.
//! Nothing is cached or retried. The only suspension point is the transport
//! call; dropping the returned future stops waiting for it.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::HypixelClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::reply::{
    BoostersReply, CountsReply, FriendsReply, GuildReply, KeyReply, LeaderboardsReply,
    PlayerReply, PunishmentStatsReply, RecentGamesReply, Reply, ResourceReply,
    SkyBlockAuctionsReply, SkyBlockBazaarReply, SkyBlockNewsReply, SkyBlockProfileReply,
    StatusReply,
};
use crate::transport::Transport;
use crate::types::ResourceType;

/// Typed async client over a pluggable transport.
#[derive(Debug)]
pub struct HypixelApi<T> {
    client: HypixelClient,
    transport: T,
}

impl<T: Transport> HypixelApi<T> {
    /// Targets the public API origin.
    pub fn new(transport: T) -> Self {
        Self::with_client(HypixelClient::default(), transport)
    }

    pub fn with_client(client: HypixelClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &HypixelClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Shuts the transport down.
    pub fn shutdown(&self) {
        self.transport.shutdown();
    }

    /// Sends `request` and decodes the response as `R`.
    pub async fn dispatch<R: Reply>(&self, request: HttpRequest) -> Result<R, ApiError> {
        debug!(url = %request.url, access = %request.access, "dispatching request");
        let response = self.transport.execute(&request).await?;
        let status = response.status;
        let result = self.client.parse::<R>(response);
        match &result {
            Ok(_) => debug!(url = %request.url, "request succeeded"),
            Err(ApiError::Status { status, cause }) => {
                warn!(url = %request.url, %status, %cause, "bad status code")
            }
            Err(err) => debug!(url = %request.url, %status, error = %err, "request failed"),
        }
        result
    }

    pub async fn get_boosters(&self) -> Result<BoostersReply, ApiError> {
        self.dispatch(self.client.build_boosters()).await
    }

    pub async fn get_leaderboards(&self) -> Result<LeaderboardsReply, ApiError> {
        self.dispatch(self.client.build_leaderboards()).await
    }

    pub async fn get_punishment_stats(&self) -> Result<PunishmentStatsReply, ApiError> {
        self.dispatch(self.client.build_punishment_stats()).await
    }

    pub async fn get_player_by_uuid(&self, player: Uuid) -> Result<PlayerReply, ApiError> {
        self.dispatch(self.client.build_player_by_uuid(player)).await
    }

    pub async fn get_player_by_name(&self, name: &str) -> Result<PlayerReply, ApiError> {
        self.dispatch(self.client.build_player_by_name(name)).await
    }

    pub async fn get_friends(&self, player: Uuid) -> Result<FriendsReply, ApiError> {
        self.dispatch(self.client.build_friends(player)).await
    }

    pub async fn get_guild_by_player(&self, player: Uuid) -> Result<GuildReply, ApiError> {
        self.dispatch(self.client.build_guild_by_player(player)).await
    }

    pub async fn get_guild_by_name(&self, name: &str) -> Result<GuildReply, ApiError> {
        self.dispatch(self.client.build_guild_by_name(name)).await
    }

    pub async fn get_guild_by_id(&self, id: &str) -> Result<GuildReply, ApiError> {
        self.dispatch(self.client.build_guild_by_id(id)).await
    }

    pub async fn get_key(&self) -> Result<KeyReply, ApiError> {
        self.dispatch(self.client.build_key()).await
    }

    pub async fn get_counts(&self) -> Result<CountsReply, ApiError> {
        self.dispatch(self.client.build_counts()).await
    }

    /// Current server of a player; for players in limbo, the last known one.
    pub async fn get_status(&self, player: Uuid) -> Result<StatusReply, ApiError> {
        self.dispatch(self.client.build_status(player)).await
    }

    /// Up to 100 of the player's most recent games.
    pub async fn get_recent_games(&self, player: Uuid) -> Result<RecentGamesReply, ApiError> {
        self.dispatch(self.client.build_recent_games(player)).await
    }

    pub async fn get_resource(&self, resource: ResourceType) -> Result<ResourceReply, ApiError> {
        self.dispatch(self.client.build_resource(resource)).await
    }

    pub async fn get_resource_path(&self, path: &str) -> Result<ResourceReply, ApiError> {
        self.dispatch(self.client.build_resource_path(path)).await
    }

    pub async fn get_skyblock_profile(&self, profile: &str) -> Result<SkyBlockProfileReply, ApiError> {
        self.dispatch(self.client.build_skyblock_profile(profile)).await
    }

    pub async fn get_skyblock_news(&self) -> Result<SkyBlockNewsReply, ApiError> {
        self.dispatch(self.client.build_skyblock_news()).await
    }

    pub async fn get_skyblock_auctions(&self, page: u32) -> Result<SkyBlockAuctionsReply, ApiError> {
        self.dispatch(self.client.build_skyblock_auctions(page)).await
    }

    pub async fn get_skyblock_bazaar(&self) -> Result<SkyBlockBazaarReply, ApiError> {
        self.dispatch(self.client.build_skyblock_bazaar()).await
    }
}
