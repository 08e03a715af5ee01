//! Default implementation for request options

use std::time::Duration;

use super::enums::ProxyType;
use super::types::RequestOptions;
use crate::http::Fields;

/// Environment variable carrying the invoking client's agent string when
/// running behind a CGI-style gateway.
pub const USER_AGENT_ENV: &str = "HTTP_USER_AGENT";

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            fields: Fields::None,
            user_password: None,
            headers: Vec::new(),
            proxy: None,
            proxy_type: ProxyType::Http,
            timeout: Duration::ZERO,
            connection_timeout: Duration::ZERO,
            // Off unless the caller opts in.
            ssl_verify: false,
            user_agent: inherited_user_agent(),
        }
    }
}

/// The agent string of the invoking environment, if it exposes one.
pub fn inherited_user_agent() -> Option<String> {
    std::env::var(USER_AGENT_ENV)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
