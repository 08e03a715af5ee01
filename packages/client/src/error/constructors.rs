use super::types::Error;

/// Creates an `Error` for a request type outside the supported verb set.
pub fn invalid_method(name: &str) -> Error {
    Error::InvalidArgument(format!("request type is not valid: {name:?}"))
}

/// Creates an `Error` for an empty URL or one that fails validation.
pub fn invalid_url(url: &str) -> Error {
    if url.trim().is_empty() {
        Error::InvalidArgument("request URL cannot be empty".to_owned())
    } else {
        Error::InvalidArgument(format!("request URL is not valid: {url:?}"))
    }
}

/// Creates an `Error` for request fields that cannot be form-encoded.
pub fn invalid_fields<E: std::fmt::Display>(e: E) -> Error {
    Error::InvalidArgument(format!("request fields cannot be encoded: {e}"))
}

/// Creates an `Error` for a client built without any HTTP transport.
pub fn missing_transport() -> Error {
    Error::Configuration(
        "no HTTP transport is available; enable the `ureq-transport` feature or supply one"
            .to_owned(),
    )
}
