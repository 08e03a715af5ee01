//! Supported request verbs

use std::fmt;
use std::str::FromStr;

use crate::error::{self, Error};

/// The fixed set of verbs a request can be issued with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    pub const ALL: [RequestMethod; 5] = [
        RequestMethod::Get,
        RequestMethod::Post,
        RequestMethod::Put,
        RequestMethod::Patch,
        RequestMethod::Delete,
    ];

    /// Upper-case verb as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
        }
    }

    /// Whether fields travel in the query string rather than the body.
    #[must_use]
    pub const fn sends_fields_in_query(self) -> bool {
        matches!(self, RequestMethod::Get)
    }
}

impl FromStr for RequestMethod {
    type Err = Error;

    /// Case-insensitive; anything outside the verb set is `InvalidArgument`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| error::invalid_method(s))
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestMethod> for http::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => http::Method::GET,
            RequestMethod::Post => http::Method::POST,
            RequestMethod::Put => http::Method::PUT,
            RequestMethod::Patch => http::Method::PATCH,
            RequestMethod::Delete => http::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("get".parse::<RequestMethod>().unwrap(), RequestMethod::Get);
        assert_eq!("Post".parse::<RequestMethod>().unwrap(), RequestMethod::Post);
        assert_eq!("PATCH".parse::<RequestMethod>().unwrap(), RequestMethod::Patch);
        assert_eq!("dElEtE".parse::<RequestMethod>().unwrap(), RequestMethod::Delete);
    }

    #[test]
    fn rejects_verbs_outside_the_set() {
        for name in ["head", "OPTIONS", "foo", ""] {
            let err = name.parse::<RequestMethod>().unwrap_err();
            assert!(err.is_invalid_argument(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn converts_to_http_method() {
        for method in RequestMethod::ALL {
            assert_eq!(http::Method::from(method).as_str(), method.as_str());
        }
    }
}
