//! Proxy type selector

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Protocol used to talk to a forward proxy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProxyType {
    /// Plain HTTP proxy (CONNECT for TLS targets)
    #[default]
    Http,
    /// SOCKS version 4
    Socks4,
    /// SOCKS version 5
    Socks5,
}

impl ProxyType {
    /// Scheme name the transport understands for this proxy type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProxyType::Http => "http",
            ProxyType::Socks4 => "socks4",
            ProxyType::Socks5 => "socks5",
        }
    }
}

impl FromStr for ProxyType {
    type Err = Infallible;

    /// Unrecognised names select `Http`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "socks4" => ProxyType::Socks4,
            "socks5" => ProxyType::Socks5,
            _ => ProxyType::Http,
        })
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProxyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        let Ok(proxy_type) = name.parse::<ProxyType>();
        Ok(proxy_type)
    }
}
