//! Typed reply shapes, one per endpoint.
//!
//! # Design
//! Every reply flattens the `{"success": ..., "cause": ...}` envelope into
//! a [`ReplyStatus`] next to its endpoint fields. Field-level codecs are
//! bound with serde attributes, so each struct's definition is also its
//! field-to-codec table.

mod boosters;
mod guild;
mod network;
mod player;
mod resource;
mod skyblock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use self::boosters::{Booster, BoosterData, BoosterState, BoostersReply};
pub use self::guild::{Guild, GuildMember, GuildReply};
pub use self::network::{
    CountsReply, GameCount, KeyRecord, KeyReply, Leaderboard, LeaderboardsReply,
    PunishmentStatsReply,
};
pub use self::player::{
    FriendsReply, Friendship, GameSession, Player, PlayerReply, RecentGamesReply, Session,
    StatusReply,
};
pub use self::resource::ResourceReply;
pub use self::skyblock::{
    BazaarOrder, BazaarProduct, BazaarQuickStatus, NewsItem, SkyBlockAuctionsReply,
    SkyBlockBazaarReply, SkyBlockNewsReply, SkyBlockProfileReply,
};

/// The envelope shared by every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyStatus {
    /// Missing or null means `false`.
    #[serde(default, deserialize_with = "false_if_null")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

fn false_if_null<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A decoded API reply.
pub trait Reply: Sized {
    /// Builds the reply from a parsed JSON document.
    fn from_document(document: Value) -> Result<Self, serde_json::Error>;

    fn status(&self) -> &ReplyStatus;

    fn is_success(&self) -> bool {
        self.status().success
    }

    fn cause(&self) -> Option<&str> {
        self.status().cause.as_deref()
    }
}

macro_rules! typed_replies {
    ($($reply:ty),+ $(,)?) => {
        $(
            impl Reply for $reply {
                fn from_document(document: Value) -> Result<Self, serde_json::Error> {
                    serde_json::from_value(document)
                }

                fn status(&self) -> &ReplyStatus {
                    &self.status
                }
            }
        )+
    };
}

typed_replies!(
    BoostersReply,
    CountsReply,
    FriendsReply,
    GuildReply,
    KeyReply,
    LeaderboardsReply,
    PlayerReply,
    PunishmentStatsReply,
    RecentGamesReply,
    SkyBlockAuctionsReply,
    SkyBlockBazaarReply,
    SkyBlockNewsReply,
    SkyBlockProfileReply,
    StatusReply,
);
