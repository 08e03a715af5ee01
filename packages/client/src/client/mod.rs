//! The request client
//!
//! [`RequestClient`] validates a call, prepares it, hands it to the
//! transport and returns a fresh [`RequestResult`](crate::http::RequestResult)
//! owned by the caller. Nothing from one call is visible to the next.

pub mod core;

pub use self::core::RequestClient;
