//! Core client implementation

use std::sync::Arc;
use std::time::Instant;

use crate::config::RequestOptions;
use crate::error::{self, Result};
use crate::http::url::redact;
use crate::http::{PreparedRequest, RequestMethod, RequestResult};
use crate::transport::{Transport, default_transport};

/// Issues blocking requests through a [`Transport`]
///
/// Cloning is cheap and clones share the (stateless) transport; results are
/// never shared between calls.
#[derive(Debug, Clone)]
pub struct RequestClient {
    transport: Arc<dyn Transport>,
}

impl RequestClient {
    /// Create a client over the transport compiled into this build.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when no HTTP transport is available.
    pub fn new() -> Result<Self> {
        default_transport()
            .map(|transport| Self {
                transport: Arc::from(transport),
            })
            .ok_or_else(error::missing_transport)
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Issue one request and capture its outcome
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty or malformed URL, before any
    /// network activity. Network failures and non-2xx statuses are reported
    /// on the returned [`RequestResult`], never as `Err`.
    pub fn execute(
        &self,
        method: RequestMethod,
        url: &str,
        options: &RequestOptions,
    ) -> Result<RequestResult> {
        let request = PreparedRequest::prepare(method, url, options)?;
        Ok(self.send(&request))
    }

    /// Issue a request named by its verb, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a verb outside GET, POST, PUT, PATCH and
    /// DELETE, or for an invalid URL.
    pub fn request(&self, method: &str, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        let method = method.parse::<RequestMethod>()?;
        self.execute(method, url, options)
    }

    /// Send an already prepared request.
    #[must_use]
    pub fn send(&self, request: &PreparedRequest) -> RequestResult {
        tracing::debug!(
            target: "requests::client",
            method = %request.method,
            url = %redact(&request.url),
            transport = self.transport.name(),
            proxy = ?request.proxy.as_ref().map(|p| p.descriptor.to_string()),
            "Dispatching request"
        );

        let started = Instant::now();
        let outcome = self.transport.send(request);
        let elapsed = started.elapsed();

        match outcome {
            Ok(response) => {
                tracing::debug!(
                    target: "requests::client",
                    method = %request.method,
                    status = response.status,
                    elapsed = ?elapsed,
                    bytes = response.body.len(),
                    "Request completed"
                );
                RequestResult::completed(response, elapsed)
            }
            Err(e) => {
                tracing::warn!(
                    target: "requests::client",
                    method = %request.method,
                    url = %redact(&request.url),
                    error_number = e.code.number(),
                    error = %e.message,
                    "Request failed in transport"
                );
                RequestResult::failed(e, elapsed)
            }
        }
    }

    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn get(&self, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        self.execute(RequestMethod::Get, url, options)
    }

    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn post(&self, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        self.execute(RequestMethod::Post, url, options)
    }

    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn put(&self, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        self.execute(RequestMethod::Put, url, options)
    }

    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn patch(&self, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        self.execute(RequestMethod::Patch, url, options)
    }

    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn delete(&self, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        self.execute(RequestMethod::Delete, url, options)
    }
}
