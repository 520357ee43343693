//! Settings for [`UreqTransport`](crate::UreqTransport).

use std::time::Duration;

use hypixel_core::codec::parse_uuid;
use hypixel_core::CodecError;
use uuid::Uuid;

pub const DEFAULT_USER_AGENT: &str = "Hypixel PublicAPI/4.0.0";

/// Applies to the whole round-trip, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_KEY_VAR: &str = "HYPIXEL_API_KEY";
pub const USER_AGENT_VAR: &str = "HYPIXEL_USER_AGENT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{API_KEY_VAR} is not set")]
    MissingApiKey,

    #[error("{API_KEY_VAR} is not a valid key: {0}")]
    InvalidApiKey(#[source] CodecError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UreqConfig {
    pub api_key: Uuid,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl UreqConfig {
    pub fn new(api_key: Uuid) -> Self {
        Self {
            api_key,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Reads `HYPIXEL_API_KEY` and, optionally, `HYPIXEL_USER_AGENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let api_key = parse_uuid(raw.trim()).map_err(ConfigError::InvalidApiKey)?;
        let mut config = Self::new(api_key);
        if let Some(user_agent) = lookup(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }
        Ok(config)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `None` disables the timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = UreqConfig::new(Uuid::nil());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn reads_key_and_user_agent() {
        let config = UreqConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "64bd424eccb042ed8b666e42a135afb4"),
            (USER_AGENT_VAR, "stats-bot/1.0"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.to_string(), "64bd424e-ccb0-42ed-8b66-6e42a135afb4");
        assert_eq!(config.user_agent, "stats-bot/1.0");
    }

    #[test]
    fn missing_key() {
        let err = UreqConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(err.to_string(), "HYPIXEL_API_KEY is not set");
    }

    #[test]
    fn invalid_key() {
        let err = UreqConfig::from_lookup(lookup(&[(API_KEY_VAR, "hunter2")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiKey(CodecError::InvalidUuid(_))));
    }

    #[test]
    fn builders() {
        let config = UreqConfig::new(Uuid::nil())
            .with_user_agent("x")
            .with_timeout(None);
        assert_eq!(config.user_agent, "x");
        assert!(config.timeout.is_none());
    }
}
