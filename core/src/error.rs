//! Error types for the API client.
//!
//! # Design
//! A call fails in exactly one layer, checked in this order:
//! - `Status`: the server answered with something other than 200. The body
//!   is only mined for a `cause` string, never decoded as a reply.
//! - `Parse`: a 200 body that is not JSON, or does not fit the reply shape
//!   (including codec failures such as a malformed UUID).
//! - `Domain`: the body decoded but reported `"success": false`.
//!
//! `Transport` covers the round-trip itself failing before any status code
//! was produced.

use crate::transport::TransportError;

/// Placeholder cause used when a non-200 body carries no readable `cause`.
pub const UNKNOWN_CAUSE: &str = "Unknown (body is not json)";

/// Errors returned by the request pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned a status code other than 200.
    #[error("bad status code {status}: {cause}")]
    Status { status: u16, cause: String },

    /// The response body could not be decoded into the expected reply.
    #[error("failed to decode response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The reply decoded but reported `"success": false`.
    #[error("request was not successful: {}", cause.as_deref().unwrap_or("no cause given"))]
    Domain { cause: Option<String> },

    /// The transport could not complete the round-trip.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// The cause string reported by the server, if this error carries one.
    pub fn cause(&self) -> Option<&str> {
        match self {
            ApiError::Status { cause, .. } => Some(cause),
            ApiError::Domain { cause } => cause.as_deref(),
            ApiError::Parse(_) | ApiError::Transport(_) => None,
        }
    }
}
