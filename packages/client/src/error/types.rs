/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised synchronously to the caller, before any network activity.
///
/// Transport failures are never represented here; they are reported as data
/// on the returned [`RequestResult`](crate::http::RequestResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bad method name, empty or malformed URL, or unencodable fields.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The runtime lacks a capability the call needs (no HTTP transport).
    #[error("configuration error: {0}")]
    Configuration(String),
}
