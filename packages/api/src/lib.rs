//! Requests Public API
//!
//! A `file_get_contents`-style call for remote URLs that also supports
//! request bodies, custom headers, basic-auth credentials, proxies and
//! timeouts. Every call returns its own [`RequestResult`]; transport
//! failures are reported on it rather than raised.
//!
//! ```no_run
//! use requests::{Requests, RequestOptions};
//!
//! let options = RequestOptions::new()
//!     .with_fields([("name", "value")])
//!     .with_user_password("user:secret");
//! let result = Requests::post("https://example.com/form", &options)?;
//! println!("{} in {:.3}s", result.http_status_code(), result.total_time());
//! # Ok::<(), requests::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod methods;

pub use methods::*;

// Re-export important types from client package
pub use requests_client::{
    Error, ErrorCode, Fields, PreparedRequest, ProxyDescriptor, ProxyType, RequestClient,
    RequestMethod, RequestOptions, RequestResult, Result, Transport, TransportError,
    TransportResponse, parse_proxy,
};

/// Main entry point providing one static method per verb
pub struct Requests;

impl Requests {
    /// Issue a GET request; fields become the query string.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an invalid URL, `Configuration` when no
    /// transport is available.
    pub fn get(url: &str, options: &RequestOptions) -> Result<RequestResult> {
        methods::get(url, options)
    }

    /// Issue a POST request; fields become the body.
    ///
    /// # Errors
    ///
    /// See [`Requests::get`].
    pub fn post(url: &str, options: &RequestOptions) -> Result<RequestResult> {
        methods::post(url, options)
    }

    /// # Errors
    ///
    /// See [`Requests::get`].
    pub fn put(url: &str, options: &RequestOptions) -> Result<RequestResult> {
        methods::put(url, options)
    }

    /// # Errors
    ///
    /// See [`Requests::get`].
    pub fn patch(url: &str, options: &RequestOptions) -> Result<RequestResult> {
        methods::patch(url, options)
    }

    /// # Errors
    ///
    /// See [`Requests::get`].
    pub fn delete(url: &str, options: &RequestOptions) -> Result<RequestResult> {
        methods::delete(url, options)
    }

    /// Issue a request whose verb is only known at runtime.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a verb outside GET, POST, PUT, PATCH and DELETE,
    /// checked before the URL.
    pub fn request(method: &str, url: &str, options: &RequestOptions) -> Result<RequestResult> {
        methods::request(method, url, options)
    }

    /// Parse a proxy URL into its normalized descriptor.
    #[must_use]
    pub fn proxy(proxy_url: &str) -> Option<ProxyDescriptor> {
        parse_proxy(proxy_url)
    }
}
