//! The `stacked` field selects a booster's shape:
//! absent or `false` is a plain booster, `true` a booster queued to stack
//! onto an active one, and an array lists the players stacked onto it. Any
//! other value keeps the raw object as `Booster::Unknown`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{CodecError, ValueCodec};
use crate::reply::{Booster, BoosterData};

const DISCRIMINATOR: &str = "stacked";

fn decode_data(value: &Value) -> Result<BoosterData, CodecError> {
    BoosterData::deserialize(value).map_err(|e| CodecError::InvalidBooster(e.to_string()))
}

fn encode_data(data: &BoosterData) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("_id".to_string(), Value::from(data.id.clone()));
    object.insert("purchaserUuid".to_string(), data.purchaser.encode());
    object.insert("amount".to_string(), Value::from(data.amount));
    object.insert("originalLength".to_string(), Value::from(data.original_length));
    object.insert("length".to_string(), Value::from(data.length));
    object.insert("gameType".to_string(), data.game_type.id().map_or(Value::Null, Value::from));
    object.insert("dateActivated".to_string(), data.date_activated.encode());
    object
}

impl ValueCodec for Booster {
    fn encode(&self) -> Value {
        let object = match self {
            Booster::Single(data) => encode_data(data),
            Booster::Queued(data) => {
                let mut object = encode_data(data);
                object.insert(DISCRIMINATOR.to_string(), Value::Bool(true));
                object
            }
            Booster::Stacked { booster, stackers } => {
                let mut object = encode_data(booster);
                let stackers = stackers.iter().map(ValueCodec::encode).collect();
                object.insert(DISCRIMINATOR.to_string(), Value::Array(stackers));
                object
            }
            Booster::Unknown(raw) => raw.clone(),
        };
        Value::Object(object)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        let Value::Object(fields) = value else {
            return Err(CodecError::unexpected("booster object", value));
        };
        match fields.get(DISCRIMINATOR) {
            None | Some(Value::Bool(false)) => decode_data(value).map(Booster::Single),
            Some(Value::Bool(true)) => decode_data(value).map(Booster::Queued),
            Some(Value::Array(items)) => {
                let stackers = items
                    .iter()
                    .map(Uuid::decode)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Booster::Stacked {
                    booster: decode_data(value)?,
                    stackers,
                })
            }
            Some(_) => Ok(Booster::Unknown(fields.clone())),
        }
    }
}

impl Serialize for Booster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        super::value::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Booster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::value::deserialize(deserializer)
    }
}
