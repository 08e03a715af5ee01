use std::time::Duration;

use crate::config::RequestOptions;

/// Timeouts after defaulting, `None` meaning the transport default applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedTimeouts {
    /// Bound on the whole transfer, redirects included
    pub total: Option<Duration>,
    /// Bound on connection establishment
    pub connect: Option<Duration>,
}

impl ResolvedTimeouts {
    /// Resolve a total/connection pair where `Duration::ZERO` is unset.
    ///
    /// An explicit connection timeout always wins; otherwise a total timeout
    /// also bounds connection establishment at half its value.
    #[must_use]
    pub fn resolve(timeout: Duration, connection_timeout: Duration) -> Self {
        let total = (!timeout.is_zero()).then_some(timeout);
        let connect = if connection_timeout.is_zero() {
            total.map(|total| total / 2)
        } else {
            Some(connection_timeout)
        };
        Self { total, connect }
    }
}

impl RequestOptions {
    /// Timeouts for these options after defaulting.
    #[must_use]
    pub fn resolved_timeouts(&self) -> ResolvedTimeouts {
        ResolvedTimeouts::resolve(self.timeout, self.connection_timeout)
    }
}
