use serde_json::Value;
use uuid::Uuid;

use super::{CodecError, ValueCodec};

/// Parses a UUID written as 32 hex digits, with dashes anywhere or not at
/// all.
pub fn parse_uuid(input: &str) -> Result<Uuid, CodecError> {
    let digits: String = input.chars().filter(|c| *c != '-').collect();
    if digits.len() != 32 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidUuid(input.to_string()));
    }
    Uuid::try_parse(&digits).map_err(|_| CodecError::InvalidUuid(input.to_string()))
}

impl ValueCodec for Uuid {
    fn encode(&self) -> Value {
        Value::String(self.hyphenated().to_string())
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::String(text) => parse_uuid(text),
            other => Err(CodecError::unexpected("uuid string", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    const DASHED: &str = "f7c77d99-9f15-4a66-a87d-c4a51ef30d19";

    #[test]
    fn dashed_and_undashed_decode_to_the_same_value() {
        let plain = Uuid::decode(&json!("f7c77d999f154a66a87dc4a51ef30d19")).unwrap();
        let dashed = Uuid::decode(&json!(DASHED)).unwrap();
        assert_eq!(plain, dashed);
        assert_eq!(plain.encode(), json!(DASHED));
    }

    #[test]
    fn uppercase_digits_are_accepted() {
        let id = parse_uuid("F7C77D999F154A66A87DC4A51EF30D19").unwrap();
        assert_eq!(id.encode(), json!(DASHED));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = parse_uuid("f7c77d999f154a66a87dc4a51ef30d1").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidUuid("f7c77d999f154a66a87dc4a51ef30d1".to_string())
        );
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(parse_uuid("g7c77d999f154a66a87dc4a51ef30d19").is_err());
        assert!(parse_uuid("{f7c77d999f154a66a87dc4a51ef30d1}").is_err());
    }

    #[test]
    fn non_string_is_rejected() {
        let err = Uuid::decode(&json!(42)).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedType {
                found: "number",
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn any_dash_placement_decodes_to_canonical_form(
            bytes in any::<[u8; 16]>(),
            dashes in proptest::collection::vec(0usize..=32, 0..6),
        ) {
            let id = Uuid::from_bytes(bytes);
            let mut text = id.simple().to_string();
            let mut positions = dashes;
            positions.sort_unstable_by(|a, b| b.cmp(a));
            for at in positions {
                text.insert(at, '-');
            }
            let decoded = parse_uuid(&text).unwrap();
            prop_assert_eq!(decoded, id);
            prop_assert_eq!(decoded.encode(), json!(id.hyphenated().to_string()));
        }
    }
}
