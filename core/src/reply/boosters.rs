use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::ReplyStatus;
use crate::types::GameType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostersReply {
    #[serde(flatten)]
    pub status: ReplyStatus,
    #[serde(default)]
    pub boosters: Vec<Booster>,
    #[serde(rename = "boosterState", default)]
    pub booster_state: BoosterState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoosterState {
    /// Whether active boosters are currently counting down.
    #[serde(default)]
    pub decrementing: bool,
}

/// Fields common to every known booster shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterData {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "purchaserUuid", with = "crate::codec::value")]
    pub purchaser: Uuid,
    pub amount: f64,
    /// Length in seconds at activation.
    #[serde(rename = "originalLength")]
    pub original_length: i64,
    /// Seconds remaining.
    pub length: i64,
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(rename = "dateActivated", with = "crate::codec::value")]
    pub date_activated: DateTime<Utc>,
}

/// A network booster. The JSON mapping lives in `codec::booster`.
#[derive(Debug, Clone, PartialEq)]
pub enum Booster {
    /// An ordinary booster.
    Single(BoosterData),
    /// A booster other players have stacked onto.
    Stacked {
        booster: BoosterData,
        stackers: Vec<Uuid>,
    },
    /// A booster waiting to stack onto an active one.
    Queued(BoosterData),
    /// A shape this client does not recognise, kept verbatim.
    Unknown(Map<String, Value>),
}

impl Booster {
    pub fn data(&self) -> Option<&BoosterData> {
        match self {
            Booster::Single(data) | Booster::Queued(data) => Some(data),
            Booster::Stacked { booster, .. } => Some(booster),
            Booster::Unknown(_) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Booster::Queued(_) | Booster::Unknown(_))
    }
}
