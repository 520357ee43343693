use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReplyStatus;
use crate::types::GameType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    pub record: KeyRecord,
}

/// Usage information for the API key that made the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    #[serde(with = "crate::codec::value")]
    pub key: Uuid,
    #[serde(with = "crate::codec::value")]
    pub owner: Uuid,
    #[serde(default)]
    pub limit: i64,
    #[serde(rename = "queriesInPastMin", default)]
    pub queries_in_past_min: i64,
    #[serde(rename = "totalQueries", default)]
    pub total_queries: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(rename = "playerCount", default)]
    pub player_count: i64,
    /// Keyed by type name (`SKYWARS`, `MAIN_LOBBY`, ...).
    #[serde(default)]
    pub games: BTreeMap<String, GameCount>,
}

impl CountsReply {
    pub fn for_game(&self, game: GameType) -> Option<&GameCount> {
        self.games.get(game.type_name()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCount {
    #[serde(default)]
    pub players: i64,
    #[serde(default)]
    pub modes: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardsReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    /// Keyed by type name.
    #[serde(default)]
    pub leaderboards: BTreeMap<String, Vec<Leaderboard>>,
}

impl LeaderboardsReply {
    pub fn for_game(&self, game: GameType) -> &[Leaderboard] {
        game.type_name()
            .and_then(|name| self.leaderboards.get(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub path: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default, with = "crate::codec::value::vec")]
    pub leaders: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunishmentStatsReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(rename = "watchdog_lastMinute", default)]
    pub watchdog_last_minute: i64,
    #[serde(rename = "staff_rollingDaily", default)]
    pub staff_rolling_daily: i64,
    #[serde(rename = "watchdog_total", default)]
    pub watchdog_total: i64,
    #[serde(rename = "watchdog_rollingDaily", default)]
    pub watchdog_rolling_daily: i64,
    #[serde(rename = "staff_total", default)]
    pub staff_total: i64,
}
