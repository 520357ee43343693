//! Query-string assembly for API requests.
//!
//! Parameters keep their insertion order. Setting a name that is already
//! present replaces its value in place.

use uuid::Uuid;

/// A typed query-string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Id(Uuid),
    Int(i64),
}

impl QueryValue {
    /// The unescaped textual form sent on the wire.
    ///
    /// Identifiers are lowercase hex without separators.
    pub fn render(&self) -> String {
        match self {
            QueryValue::Text(text) => text.clone(),
            QueryValue::Id(id) => id.simple().to_string(),
            QueryValue::Int(n) => n.to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<Uuid> for QueryValue {
    fn from(value: Uuid) -> Self {
        QueryValue::Id(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

/// Ordered set of query parameters for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name=value`, replacing any earlier value for `name`.
    pub fn add(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        let value = value.into();
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name.to_string(), value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The `&`-joined, form-urlencoded query string without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            serializer.append_pair(name, &value.render());
        }
        serializer.finish()
    }

    /// Appends the query string to `base`. An empty set leaves `base` as is.
    pub fn apply(&self, base: &str) -> String {
        if self.params.is_empty() {
            return base.to_string();
        }
        format!("{base}?{}", self.to_query_string())
    }
}
