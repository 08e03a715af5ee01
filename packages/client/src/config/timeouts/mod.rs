//! Timeout resolution
//!
//! Turns the caller's total/connection timeout pair into the values handed
//! to the transport.

pub mod timeout_config;

pub use timeout_config::ResolvedTimeouts;
