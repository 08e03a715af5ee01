//! HTTP transport abstraction for pluggable backends.
//!
//! The client never speaks HTTP itself: it hands a [`PreparedRequest`] to a
//! [`Transport`] and records what comes back.

use std::fmt;

use crate::error::TransportError;
use crate::http::PreparedRequest;

#[cfg(feature = "ureq-transport")]
mod ureq_backend;
#[cfg(feature = "ureq-transport")]
pub use ureq_backend::UreqTransport;

/// A completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Final HTTP status code, after redirects.
    pub status: u16,
    /// Complete response body.
    pub body: String,
}

/// Trait for pluggable transport backends
///
/// Implementations perform exactly one blocking round-trip per call (plus
/// redirects), acquire any connection resources inside `send` and release
/// them before returning, and report network failures as `Err` values,
/// never by panicking. Non-2xx statuses are `Ok`.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Send a request and return the response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for any failure below the HTTP layer.
    fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError>;
}

/// The transport compiled into this build, if any.
#[must_use]
pub fn default_transport() -> Option<Box<dyn Transport>> {
    #[cfg(feature = "ureq-transport")]
    {
        Some(Box::new(UreqTransport::new()))
    }
    #[cfg(not(feature = "ureq-transport"))]
    {
        None
    }
}
