//! Stateless request builder and response parser for the API.
//!
//! # Design
//! `HypixelClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is a `build_*` method producing an
//! `HttpRequest`; every reply is parsed by the single generic
//! [`HypixelClient::parse`]. Callers that run their own I/O can use this
//! type directly; [`HypixelApi`](crate::HypixelApi) pairs it with a
//! [`Transport`](crate::Transport).

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{Access, HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::reply::Reply;
use crate::response;
use crate::types::ResourceType;

/// Public API origin.
pub const BASE_URL: &str = "https://api.hypixel.net";

/// Synchronous, stateless client for the API.
#[derive(Debug, Clone)]
pub struct HypixelClient {
    base_url: String,
}

impl Default for HypixelClient {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl HypixelClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// An authenticated GET of `path` with `params`.
    pub fn build(&self, path: &str, params: &QueryParams) -> HttpRequest {
        HttpRequest {
            url: params.apply(&format!("{}/{path}", self.base_url)),
            access: Access::Authenticated,
        }
    }

    pub fn build_boosters(&self) -> HttpRequest {
        self.build("boosters", &QueryParams::new())
    }

    pub fn build_leaderboards(&self) -> HttpRequest {
        self.build("leaderboards", &QueryParams::new())
    }

    pub fn build_punishment_stats(&self) -> HttpRequest {
        self.build("punishmentstats", &QueryParams::new())
    }

    pub fn build_player_by_uuid(&self, player: Uuid) -> HttpRequest {
        self.build("player", &QueryParams::new().add("uuid", player))
    }

    /// Looks a player up by name. The name lookup is rate limited per name
    /// upstream; prefer [`build_player_by_uuid`](Self::build_player_by_uuid).
    pub fn build_player_by_name(&self, name: &str) -> HttpRequest {
        self.build("player", &QueryParams::new().add("name", name))
    }

    pub fn build_friends(&self, player: Uuid) -> HttpRequest {
        self.build("friends", &QueryParams::new().add("uuid", player))
    }

    pub fn build_guild_by_player(&self, player: Uuid) -> HttpRequest {
        self.build("guild", &QueryParams::new().add("player", player))
    }

    pub fn build_guild_by_name(&self, name: &str) -> HttpRequest {
        self.build("guild", &QueryParams::new().add("name", name))
    }

    /// `id` is the guild's hex object id.
    pub fn build_guild_by_id(&self, id: &str) -> HttpRequest {
        self.build("guild", &QueryParams::new().add("id", id))
    }

    pub fn build_key(&self) -> HttpRequest {
        self.build("key", &QueryParams::new())
    }

    pub fn build_counts(&self) -> HttpRequest {
        self.build("counts", &QueryParams::new())
    }

    pub fn build_status(&self, player: Uuid) -> HttpRequest {
        self.build("status", &QueryParams::new().add("uuid", player))
    }

    pub fn build_recent_games(&self, player: Uuid) -> HttpRequest {
        self.build("recentGames", &QueryParams::new().add("uuid", player))
    }

    pub fn build_resource(&self, resource: ResourceType) -> HttpRequest {
        self.build_resource_path(resource.path())
    }

    /// Resources are the only endpoints served without an API key.
    pub fn build_resource_path(&self, path: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/resources/{}", self.base_url, path.trim_start_matches('/')),
            access: Access::Anonymous,
        }
    }

    pub fn build_skyblock_profile(&self, profile: &str) -> HttpRequest {
        self.build("skyblock/profile", &QueryParams::new().add("profile", profile))
    }

    pub fn build_skyblock_news(&self) -> HttpRequest {
        self.build("skyblock/news", &QueryParams::new())
    }

    pub fn build_skyblock_auctions(&self, page: u32) -> HttpRequest {
        self.build("skyblock/auctions", &QueryParams::new().add("page", page))
    }

    pub fn build_skyblock_bazaar(&self) -> HttpRequest {
        self.build("skyblock/bazaar", &QueryParams::new())
    }

    /// Validates and decodes a response into reply `R`.
    pub fn parse<R: Reply>(&self, response: HttpResponse) -> Result<R, ApiError> {
        response::process(response)
    }
}
