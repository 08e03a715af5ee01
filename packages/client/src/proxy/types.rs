use std::fmt;

use crate::config::ProxyType;

/// Parsed forward-proxy endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyDescriptor {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Normalized `scheme://[user:pass@]host[:port]/`
    pub proxy: String,
}

impl ProxyDescriptor {
    /// Credentials, only when both halves are present.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// Render this endpoint under another scheme.
    pub(crate) fn render(&self, scheme: &str) -> String {
        let mut proxy = format!("{scheme}://");
        if let Some((user, pass)) = self.credentials() {
            proxy.push_str(user);
            proxy.push(':');
            proxy.push_str(pass);
            proxy.push('@');
        }
        proxy.push_str(&self.host);
        if let Some(port) = self.port {
            proxy.push(':');
            proxy.push_str(&port.to_string());
        }
        proxy.push('/');
        proxy
    }
}

// Keeps the password out of logs.
impl fmt::Debug for ProxyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyDescriptor")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Display for ProxyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// A parsed proxy together with the protocol used to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub descriptor: ProxyDescriptor,
    pub proxy_type: ProxyType,
}

impl ProxySettings {
    #[must_use]
    pub fn new(descriptor: ProxyDescriptor, proxy_type: ProxyType) -> Self {
        Self {
            descriptor,
            proxy_type,
        }
    }

    /// The proxy address handed to the transport.
    ///
    /// A plain `http` scheme takes its protocol from `proxy_type`; any other
    /// scheme written in the proxy URL is kept as is.
    #[must_use]
    pub fn transport_url(&self) -> String {
        if self.descriptor.scheme == "http" {
            self.descriptor.render(self.proxy_type.as_str())
        } else {
            self.descriptor.proxy.clone()
        }
    }
}
