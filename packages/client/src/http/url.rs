//! URL validation and query composition

use url::Url;

use crate::error::{self, Result};

/// Validate a request URL
///
/// The URL is trimmed and must be absolute with a scheme and a non-empty
/// host. The trimmed string is returned unchanged (not re-serialized).
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty or malformed URL.
pub fn validate_url(url_str: &str) -> Result<String> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return Err(error::invalid_url(url_str));
    }
    match Url::parse(trimmed) {
        Ok(url) if has_host(&url) => Ok(trimmed.to_owned()),
        _ => Err(error::invalid_url(url_str)),
    }
}

pub(crate) fn has_host(url: &Url) -> bool {
    !url.cannot_be_a_base() && url.host_str().is_some_and(|host| !host.is_empty())
}

/// Append an encoded query to `url`.
///
/// An empty query leaves the URL untouched. A URL that already carries a
/// query gets `&` as separator instead of `?`.
#[must_use]
pub fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_owned();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

/// Render a URL for logs with any userinfo removed.
#[must_use]
pub fn redact(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(mut url) => {
            // Both setters only fail for URLs without a host, which we never log.
            let _ = url.set_username("");
            let _ = url.set_password(None);
            url.into()
        }
        Err(_) => "<invalid url>".to_owned(),
    }
}
