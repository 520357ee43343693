//! Custom JSON representations for values that do not map 1:1 onto JSON
//! primitives.
//!
//! # Design
//! Each semantic type implements [`ValueCodec`], a paired encode/decode rule
//! over `serde_json::Value`. The set of implementations is the codec
//! registry: it is fixed at compile time and carries no state.
//!
//! Reply structs bind fields to a codec statically:
//! - types owned by this crate (`GameType`, `ServerType`, `Booster`)
//!   implement `Serialize`/`Deserialize` through their codec directly;
//! - foreign types (`Uuid`, `DateTime<Utc>`) are bound per field with
//!   `#[serde(with = "codec::value")]` and its `option`/`vec` variants.
//!
//! Codec failures surface as serde custom errors, so they reach callers as
//! `ApiError::Parse` with the codec's message intact.

mod booster;
mod datetime;
mod game_type;
mod identifier;
mod server_type;

use serde_json::Value;

pub use self::datetime::parse_timestamp;
pub use self::identifier::parse_uuid;

/// Errors produced when a JSON value cannot be decoded into its semantic
/// type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The string is not 32 hex digits once dashes are removed.
    #[error("invalid uuid {0:?}: expected 32 hex digits")]
    InvalidUuid(String),

    /// The value is neither epoch millis nor an RFC 3339 timestamp.
    #[error("invalid timestamp {0}")]
    InvalidTimestamp(String),

    /// The JSON value has the wrong kind for this codec.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// A known booster variant whose fields do not fit its shape.
    #[error("invalid booster: {0}")]
    InvalidBooster(String),
}

impl CodecError {
    pub(crate) fn unexpected(expected: &'static str, found: &Value) -> Self {
        CodecError::UnexpectedType {
            expected,
            found: kind_of(found),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Paired encode/decode rule for one semantic value type.
pub trait ValueCodec: Sized {
    /// Encodes `self` into its JSON representation.
    fn encode(&self) -> Value;

    /// Decodes a JSON value into `Self`.
    fn decode(value: &Value) -> Result<Self, CodecError>;
}

/// Serde adapter routing a field through its [`ValueCodec`].
///
/// Use as `#[serde(with = "crate::codec::value")]`.
pub mod value {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use super::ValueCodec;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ValueCodec,
        S: Serializer,
    {
        value.encode().serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: ValueCodec,
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        T::decode(&raw).map_err(D::Error::custom)
    }

    /// Optional fields: JSON `null` and absent fields (with
    /// `#[serde(default)]`) decode to `None`.
    pub mod option {
        use super::*;

        pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            T: ValueCodec,
            S: Serializer,
        {
            value.as_ref().map(ValueCodec::encode).serialize(serializer)
        }

        pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            T: ValueCodec,
            D: Deserializer<'de>,
        {
            match Option::<Value>::deserialize(deserializer)? {
                None | Some(Value::Null) => Ok(None),
                Some(raw) => T::decode(&raw).map(Some).map_err(D::Error::custom),
            }
        }
    }

    /// JSON arrays of codec values.
    pub mod vec {
        use super::*;

        pub fn serialize<T, S>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
        where
            T: ValueCodec,
            S: Serializer,
        {
            serializer.collect_seq(values.iter().map(ValueCodec::encode))
        }

        pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
        where
            T: ValueCodec,
            D: Deserializer<'de>,
        {
            Vec::<Value>::deserialize(deserializer)?
                .iter()
                .map(|raw| T::decode(raw).map_err(D::Error::custom))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use uuid::Uuid;

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "crate::codec::value")]
        id: Uuid,
        #[serde(default, with = "crate::codec::value::option")]
        seen: Option<DateTime<Utc>>,
        #[serde(default, with = "crate::codec::value::vec")]
        friends: Vec<Uuid>,
    }

    #[test]
    fn fields_route_through_their_codec() {
        let sample: Sample = serde_json::from_value(json!({
            "id": "f7c77d999f154a66a87dc4a51ef30d19",
            "seen": 1_600_000_000_000i64,
            "friends": ["f7c77d99-9f15-4a66-a87d-c4a51ef30d19"],
        }))
        .unwrap();
        assert_eq!(sample.id, sample.friends[0]);
        assert_eq!(sample.seen.unwrap().timestamp_millis(), 1_600_000_000_000);

        let encoded = serde_json::to_value(&sample).unwrap();
        assert_eq!(encoded["id"], "f7c77d99-9f15-4a66-a87d-c4a51ef30d19");
        assert_eq!(encoded["seen"], 1_600_000_000_000i64);
    }

    #[test]
    fn null_and_missing_optionals_decode_to_none() {
        let with_null: Sample = serde_json::from_value(json!({
            "id": "f7c77d999f154a66a87dc4a51ef30d19",
            "seen": null,
        }))
        .unwrap();
        assert!(with_null.seen.is_none());
        assert!(with_null.friends.is_empty());
    }

    #[test]
    fn codec_failure_becomes_serde_error() {
        let err = serde_json::from_value::<Sample>(json!({ "id": "not-a-uuid" })).unwrap_err();
        assert!(err.to_string().contains("invalid uuid"), "{err}");
    }
}
