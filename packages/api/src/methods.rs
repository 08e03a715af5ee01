//! Verb functions
//!
//! Each call builds a client over the compiled-in transport, issues exactly
//! one request and hands back the owned result.

use requests_client::{
    PreparedRequest, RequestClient, RequestMethod, RequestOptions, RequestResult, Result,
};

/// Issue a request with an explicit verb.
///
/// # Errors
///
/// `InvalidArgument` for an invalid URL, `Configuration` when no transport
/// is available.
pub fn execute(method: RequestMethod, url: &str, options: &RequestOptions) -> Result<RequestResult> {
    let request = PreparedRequest::prepare(method, url, options)?;
    Ok(RequestClient::new()?.send(&request))
}

/// Issue a request whose verb is given by name, case-insensitively.
///
/// # Errors
///
/// `InvalidArgument` for an unknown verb or an invalid URL, `Configuration`
/// when no transport is available.
pub fn request(method: &str, url: &str, options: &RequestOptions) -> Result<RequestResult> {
    let method = method.parse::<RequestMethod>()?;
    execute(method, url, options)
}

/// # Errors
///
/// See [`execute`].
pub fn get(url: &str, options: &RequestOptions) -> Result<RequestResult> {
    execute(RequestMethod::Get, url, options)
}

/// # Errors
///
/// See [`execute`].
pub fn post(url: &str, options: &RequestOptions) -> Result<RequestResult> {
    execute(RequestMethod::Post, url, options)
}

/// # Errors
///
/// See [`execute`].
pub fn put(url: &str, options: &RequestOptions) -> Result<RequestResult> {
    execute(RequestMethod::Put, url, options)
}

/// # Errors
///
/// See [`execute`].
pub fn patch(url: &str, options: &RequestOptions) -> Result<RequestResult> {
    execute(RequestMethod::Patch, url, options)
}

/// # Errors
///
/// See [`execute`].
pub fn delete(url: &str, options: &RequestOptions) -> Result<RequestResult> {
    execute(RequestMethod::Delete, url, options)
}
