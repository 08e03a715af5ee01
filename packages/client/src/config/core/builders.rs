//! Fluent builder methods for request options

use std::time::Duration;

use super::enums::ProxyType;
use super::types::RequestOptions;
use crate::http::Fields;

impl RequestOptions {
    /// Start from the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request fields
    ///
    /// # Examples
    /// ```no_run
    /// use requests_client::RequestOptions;
    ///
    /// let options = RequestOptions::new().with_fields([("a", "b"), ("c", "d")]);
    /// assert_eq!(options.fields.encode().unwrap().as_deref(), Some("a=b&c=d"));
    /// ```
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Set basic-auth credentials, formatted `user:password`.
    #[must_use]
    pub fn with_user_password(mut self, user_password: impl Into<String>) -> Self {
        self.user_password = Some(user_password.into());
        self
    }

    /// Append one header entry. An empty `name` sends `value` as a raw line.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append several header entries, keeping their order.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Route the request through a forward proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    #[must_use]
    pub fn with_proxy_type(mut self, proxy_type: ProxyType) -> Self {
        self.proxy_type = proxy_type;
        self
    }

    /// Set the total transfer timeout
    ///
    /// Without an explicit connection timeout, half of this value bounds
    /// connection establishment.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Toggle peer certificate and host name verification.
    #[must_use]
    pub fn with_ssl_verify(mut self, verify: bool) -> Self {
        self.ssl_verify = verify;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send no `User-Agent` of our own; the transport default applies.
    #[must_use]
    pub fn without_user_agent(mut self) -> Self {
        self.user_agent = None;
        self
    }
}
