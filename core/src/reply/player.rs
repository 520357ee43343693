use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::ReplyStatus;
use crate::types::{GameType, ServerType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    /// `None` when the player has never joined the network.
    #[serde(default)]
    pub player: Option<Player>,
}

/// A player profile. Only a handful of fields are typed; everything else
/// (stats, achievements, ...) is kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(with = "crate::codec::value")]
    pub uuid: Uuid,
    #[serde(rename = "displayname", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstLogin", default, with = "crate::codec::value::option")]
    pub first_login: Option<DateTime<Utc>>,
    #[serde(rename = "lastLogin", default, with = "crate::codec::value::option")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(rename = "networkExp", default)]
    pub network_exp: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    /// Network level derived from network experience. Level 1 needs 10000
    /// exp and every further level 2500 more than the previous one.
    pub fn network_level(&self) -> f64 {
        const BASE: f64 = 10_000.0;
        const GROWTH: f64 = 2_500.0;
        const REVERSE_PQ_PREFIX: f64 = -(BASE - 0.5 * GROWTH) / GROWTH;
        const REVERSE_CONST: f64 = REVERSE_PQ_PREFIX * REVERSE_PQ_PREFIX;
        const GROWTH_DIVIDES_2: f64 = 2.0 / GROWTH;

        if self.network_exp < 0.0 {
            return 1.0;
        }
        (1.0 + REVERSE_PQ_PREFIX + (REVERSE_CONST + GROWTH_DIVIDES_2 * self.network_exp).sqrt())
            .floor()
    }

    /// Raw per-game stats keyed by database name, if present.
    pub fn stats(&self, game: GameType) -> Option<&Value> {
        let name = game.database_name()?;
        self.extra.get("stats")?.get(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(default)]
    pub records: Vec<Friendship>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "uuidSender", with = "crate::codec::value")]
    pub sender: Uuid,
    #[serde(rename = "uuidReceiver", with = "crate::codec::value")]
    pub receiver: Uuid,
    #[serde(with = "crate::codec::value")]
    pub started: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(default, with = "crate::codec::value::option")]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub session: Session,
}

/// Where a player currently is. For players in limbo this is the last
/// known server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub online: bool,
    #[serde(rename = "gameType", default)]
    pub server_type: Option<ServerType>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentGamesReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(default, with = "crate::codec::value::option")]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub games: Vec<GameSession>,
}

/// One recently played game. Games drop off the list after three days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    #[serde(with = "crate::codec::value")]
    pub date: DateTime<Utc>,
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
    /// `None` while the game is still running.
    #[serde(default, with = "crate::codec::value::option")]
    pub ended: Option<DateTime<Utc>>,
}

impl GameSession {
    pub fn is_ongoing(&self) -> bool {
        self.ended.is_none()
    }
}
