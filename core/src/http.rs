//! HTTP request and response types for the host-does-IO pattern.
//!
//! # Design
//! Every call against the API is a GET, so a request is fully described by
//! its URL and whether the caller's credential must be attached. The core
//! builds `HttpRequest` values and consumes `HttpResponse` values; executing
//! the round-trip belongs to a [`Transport`](crate::transport::Transport)
//! or to the host.

use std::fmt;

/// Whether a request must carry the caller's API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Anonymous,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Authenticated => write!(f, "authenticated"),
            Access::Anonymous => write!(f, "anonymous"),
        }
    }
}

/// A GET request described as plain data.
///
/// Built by `HypixelClient::build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub access: Access,
}

/// Status code and raw body of a completed round-trip.
///
/// Consumed exactly once by the response pipeline.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
