use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{CodecError, ValueCodec};

/// Parses epoch milliseconds written as a string, or an RFC 3339 timestamp.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, CodecError> {
    let input = input.trim();
    if let Ok(millis) = input.parse::<i64>() {
        return from_millis(millis);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| CodecError::InvalidTimestamp(input.to_string()))
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, CodecError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| CodecError::InvalidTimestamp(millis.to_string()))
}

impl ValueCodec for DateTime<Utc> {
    fn encode(&self) -> Value {
        Value::from(self.timestamp_millis())
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::Number(number) => {
                // Some endpoints send millis as a float, e.g. 1589150212345.0.
                let millis = match number.as_i64() {
                    Some(millis) => millis,
                    None => match number.as_f64() {
                        Some(float) if float.is_finite() && float.fract() == 0.0 => float as i64,
                        _ => return Err(CodecError::InvalidTimestamp(number.to_string())),
                    },
                };
                from_millis(millis)
            }
            Value::String(text) => parse_timestamp(text),
            other => Err(CodecError::unexpected("timestamp", other)),
        }
    }
}
