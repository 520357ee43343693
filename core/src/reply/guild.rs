use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::ReplyStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    /// `None` when no guild matched the query.
    #[serde(default)]
    pub guild: Option<Guild>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guild {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default, with = "crate::codec::value::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exp: i64,
    #[serde(default)]
    pub members: Vec<GuildMember>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Guild {
    pub fn member(&self, uuid: Uuid) -> Option<&GuildMember> {
        self.members.iter().find(|member| member.uuid == uuid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    #[serde(with = "crate::codec::value")]
    pub uuid: Uuid,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default, with = "crate::codec::value::option")]
    pub joined: Option<DateTime<Utc>>,
}
