//! Blocking `ureq` transport for `hypixel-core`.
//!
//! # Design
//! One `ureq::Agent` is shared by every call; it pools connections
//! internally and is safe to use from many threads. Each call runs on
//! tokio's blocking pool, so the returned futures must be polled inside a
//! tokio runtime. Dropping a future stops waiting but lets the blocking
//! request run to completion.

mod config;

use std::sync::atomic::{AtomicBool, Ordering};

use hypixel_core::{Access, HttpResponse, HypixelApi, HypixelClient, Transport, TransportError};

pub use config::{
    ConfigError, UreqConfig, API_KEY_VAR, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, USER_AGENT_VAR,
};

/// Header carrying the API key on authenticated calls.
pub const API_KEY_HEADER: &str = "API-Key";

pub struct UreqTransport {
    agent: ureq::Agent,
    api_key: String,
    user_agent: String,
    shut_down: AtomicBool,
}

impl UreqTransport {
    pub fn new(config: UreqConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            api_key: config.api_key.hyphenated().to_string(),
            user_agent: config.user_agent,
            shut_down: AtomicBool::new(false),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        UreqConfig::from_env().map(Self::new)
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    async fn call(&self, url: &str, access: Access) -> Result<HttpResponse, TransportError> {
        if self.is_shut_down() {
            return Err(TransportError::Shutdown);
        }
        let agent = self.agent.clone();
        let url = url.to_string();
        let api_key = (access == Access::Authenticated).then(|| self.api_key.clone());
        let user_agent = self.user_agent.clone();
        tokio::task::spawn_blocking(move || fetch(&agent, &url, api_key.as_deref(), &user_agent))
            .await
            .map_err(TransportError::request)?
    }
}

fn fetch(
    agent: &ureq::Agent,
    url: &str,
    api_key: Option<&str>,
    user_agent: &str,
) -> Result<HttpResponse, TransportError> {
    let mut request = agent.get(url).header("User-Agent", user_agent);
    if let Some(key) = api_key {
        request = request.header(API_KEY_HEADER, key);
    }
    let mut response = request.call().map_err(TransportError::request)?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(TransportError::request)?;
    tracing::trace!(%url, status, bytes = body.len(), "response received");
    Ok(HttpResponse::new(status, body))
}

impl Transport for UreqTransport {
    async fn authenticated_call(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.call(url, Access::Authenticated).await
    }

    async fn anonymous_call(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.call(url, Access::Anonymous).await
    }

    fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::SeqCst) {
            tracing::info!("ureq transport shut down");
        }
    }
}

/// A client for the public API using the given settings.
pub fn connect(config: UreqConfig) -> HypixelApi<UreqTransport> {
    HypixelApi::new(UreqTransport::new(config))
}

/// A client for `base_url` using the given settings.
pub fn connect_to(base_url: &str, config: UreqConfig) -> HypixelApi<UreqTransport> {
    HypixelApi::with_client(HypixelClient::new(base_url), UreqTransport::new(config))
}
