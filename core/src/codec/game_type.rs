use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{CodecError, ValueCodec};
use crate::types::GameType;

impl ValueCodec for GameType {
    fn encode(&self) -> Value {
        self.type_name().map_or(Value::Null, Value::from)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::Number(number) => Ok(number.as_u64().map_or(GameType::Unknown, GameType::from_id)),
            Value::String(text) => Ok(match text.parse::<u64>() {
                Ok(id) => GameType::from_id(id),
                Err(_) => GameType::from_name(text),
            }),
            other => Err(CodecError::unexpected("game type", other)),
        }
    }
}

impl Serialize for GameType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        super::value::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for GameType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::value::deserialize(deserializer)
    }
}
