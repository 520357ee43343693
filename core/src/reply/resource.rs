use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Reply, ReplyStatus};
use crate::codec::ValueCodec;

/// Reference data served under `resources/`. The payload has no fixed
/// schema, so the whole document is kept as parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceReply {
    status: ReplyStatus,
    document: Map<String, Value>,
}

impl ResourceReply {
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn into_document(self) -> Map<String, Value> {
        self.document
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// When the resource was last changed, if the document says so.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.document
            .get("lastUpdated")
            .and_then(|raw| DateTime::<Utc>::decode(raw).ok())
    }
}

impl Reply for ResourceReply {
    fn from_document(document: Value) -> Result<Self, serde_json::Error> {
        let status = ReplyStatus::deserialize(&document)?;
        let document = Map::<String, Value>::deserialize(document)?;
        Ok(Self { status, document })
    }

    fn status(&self) -> &ReplyStatus {
        &self.status
    }
}
