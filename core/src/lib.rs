//! Typed async client core for the Hypixel public API.
//!
//! # Overview
//! Builds request URLs, hands them to a pluggable [`Transport`], and turns
//! the raw status/body pair into a typed reply or exactly one of three
//! failure kinds: a bad status code, an unparseable body, or a reply that
//! reported `"success": false`.
//!
//! # Design
//! - `HypixelClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse` consumes an `HttpResponse`. No I/O happens in the core.
//! - `HypixelApi` composes the client with a `Transport`; the transport is
//!   the only shared, concurrently used component.
//! - Values without a 1:1 JSON mapping (UUIDs, game and server types,
//!   timestamps, boosters) go through the `codec` module.

pub mod api;
pub mod client;
pub mod codec;
pub mod error;
pub mod http;
pub mod query;
pub mod reply;
pub mod response;
pub mod transport;
pub mod types;

pub use api::HypixelApi;
pub use client::{HypixelClient, BASE_URL};
pub use codec::{CodecError, ValueCodec};
pub use error::{ApiError, UNKNOWN_CAUSE};
pub use http::{Access, HttpRequest, HttpResponse};
pub use query::{QueryParams, QueryValue};
pub use reply::{Reply, ReplyStatus, ResourceReply};
pub use transport::{Transport, TransportError};
pub use types::{GameType, LobbyType, ResourceType, ServerType};
