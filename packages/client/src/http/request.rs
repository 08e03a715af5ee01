//! Transport-agnostic request preparation
//!
//! Everything that depends only on the caller's input happens here, before
//! any network activity: URL validation, field encoding, header lines,
//! credentials, proxy parsing and timeout defaulting.

use http::HeaderValue;

use super::headers::{has_header, header_lines};
use super::method::RequestMethod;
use super::url::{append_query, validate_url};
use crate::auth::basic_auth;
use crate::config::{RequestOptions, ResolvedTimeouts};
use crate::error::Result;
use crate::proxy::{ProxySettings, parse_proxy};

/// Redirects followed before the transfer fails.
pub const DEFAULT_MAX_REDIRECTS: u32 = 20;

/// Content type of encoded fields sent as a body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully-resolved request, ready for any [`Transport`](crate::transport::Transport)
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: RequestMethod,
    /// Target URL, query string included for GET
    pub url: String,
    /// Encoded fields; always `None` for GET
    pub body: Option<String>,
    /// Raw header lines in caller order
    pub header_lines: Vec<String>,
    pub authorization: Option<HeaderValue>,
    pub user_agent: Option<String>,
    pub proxy: Option<ProxySettings>,
    pub timeouts: ResolvedTimeouts,
    pub ssl_verify: bool,
    pub max_redirects: u32,
}

impl PreparedRequest {
    /// Resolve `options` for a `method` call to `url`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty or malformed URL and for fields
    /// or credentials that cannot be encoded.
    pub fn prepare(method: RequestMethod, url: &str, options: &RequestOptions) -> Result<Self> {
        let url = validate_url(url)?;
        let fields = options.fields.encode()?.unwrap_or_default();

        let (url, body) = if method.sends_fields_in_query() {
            (append_query(&url, &fields), None)
        } else {
            (url, Some(fields))
        };

        let mut header_lines = header_lines(&options.headers);
        if body.as_deref().is_some_and(|body| !body.is_empty())
            && !has_header(&header_lines, "content-type")
        {
            header_lines.push(format!("Content-Type: {FORM_CONTENT_TYPE}"));
        }

        let authorization = options
            .user_password
            .as_deref()
            .filter(|credentials| !credentials.is_empty())
            .map(basic_auth)
            .transpose()?;

        let user_agent = options
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|agent| !agent.is_empty())
            .map(str::to_owned);

        Ok(Self {
            method,
            url,
            body,
            header_lines,
            authorization,
            user_agent,
            proxy: proxy_settings(options),
            timeouts: options.resolved_timeouts(),
            ssl_verify: options.ssl_verify,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        })
    }
}

fn proxy_settings(options: &RequestOptions) -> Option<ProxySettings> {
    let proxy = options
        .proxy
        .as_deref()
        .map(str::trim)
        .filter(|proxy| !proxy.is_empty())?;

    match parse_proxy(proxy) {
        Some(descriptor) => Some(ProxySettings::new(descriptor, options.proxy_type)),
        None => {
            tracing::warn!(
                target: "requests::proxy",
                "Ignoring proxy that is not a valid URL; connecting directly"
            );
            None
        }
    }
}
