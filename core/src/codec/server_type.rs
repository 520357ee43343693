use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{CodecError, ValueCodec};
use crate::types::ServerType;

impl ValueCodec for ServerType {
    fn encode(&self) -> Value {
        self.type_name().map_or(Value::Null, Value::from)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::String(text) => Ok(ServerType::from_name(text)),
            other => Err(CodecError::unexpected("server type", other)),
        }
    }
}

impl Serialize for ServerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        super::value::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ServerType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::value::deserialize(deserializer)
    }
}
