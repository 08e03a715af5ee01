//! Outcome of a single request

use std::time::Duration;

use http::StatusCode;

use crate::error::{ErrorCode, TransportError};
use crate::transport::TransportResponse;

/// Result of exactly one request
///
/// Transport failures (DNS, refused connection, timeout, TLS) are carried
/// here as data: `error_number` is non-zero, `error_message` non-empty and
/// `output` absent. Non-2xx statuses are not failures at this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestResult {
    output: Option<String>,
    http_status_code: u16,
    elapsed: Duration,
    error: Option<TransportError>,
}

impl RequestResult {
    pub(crate) fn completed(response: TransportResponse, elapsed: Duration) -> Self {
        Self {
            output: Some(response.body),
            http_status_code: response.status,
            elapsed,
            error: None,
        }
    }

    pub(crate) fn failed(error: TransportError, elapsed: Duration) -> Self {
        Self {
            output: None,
            http_status_code: error.status,
            elapsed,
            error: Some(error),
        }
    }

    /// Response body, absent when the transfer failed.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    #[must_use]
    pub fn into_output(self) -> Option<String> {
        self.output
    }

    /// Final HTTP status code, `0` if no response arrived.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Final HTTP status as a typed value, if one arrived.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.http_status_code).ok()
    }

    /// Total transaction time in seconds.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Transport error number, `0` on success.
    #[must_use]
    pub fn error_number(&self) -> u32 {
        self.error.as_ref().map_or(0, |error| error.code.number())
    }

    /// Transport error detail, empty on success.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.error.as_ref().map_or("", |error| error.message.as_str())
    }

    /// Descriptive text for [`error_number`](Self::error_number).
    #[must_use]
    pub fn error_code_message(&self) -> &'static str {
        ErrorCode::describe(self.error_number())
    }

    #[must_use]
    pub fn transport_error(&self) -> Option<&TransportError> {
        self.error.as_ref()
    }

    /// Whether the transfer completed, whatever the HTTP status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
