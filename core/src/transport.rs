//! The network collaborator behind [`HypixelApi`](crate::HypixelApi).
//!
//! A transport performs the actual GET and reports the status code and body
//! as plain data. It is shared by every in-flight call, so implementations
//! must be safe to use concurrently; connection reuse, TLS and timeouts are
//! their business, not the core's.

use std::future::Future;

use crate::http::{Access, HttpRequest, HttpResponse};

/// Errors raised by a transport before a response was obtained.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The round-trip failed (connection refused, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport was shut down.
    #[error("transport shut down")]
    Shutdown,
}

impl TransportError {
    pub fn request<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TransportError::Request(Box::new(err))
    }
}

/// Executes GET requests against the API.
///
/// Dropping a returned future stops waiting for the response; whether the
/// underlying socket operation is aborted is up to the implementation.
pub trait Transport: Send + Sync + 'static {
    /// GET `url` with the caller's credential attached.
    fn authenticated_call(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;

    /// GET `url` without any credential.
    fn anonymous_call(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;

    /// Releases transport resources. Calls issued afterwards may fail.
    fn shutdown(&self);

    /// Dispatches `request` to the call matching its access mode.
    fn execute(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        async move {
            match request.access {
                Access::Authenticated => self.authenticated_call(&request.url).await,
                Access::Anonymous => self.anonymous_call(&request.url).await,
            }
        }
    }
}
