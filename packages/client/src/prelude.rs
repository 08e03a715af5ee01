//! Requests Prelude
//!
//! The types callers need for everyday requests.

pub use crate::client::RequestClient;
pub use crate::config::{ProxyType, RequestOptions};
pub use crate::error::{Error, ErrorCode, Result, TransportError};
pub use crate::http::{Fields, RequestMethod, RequestResult};
pub use crate::proxy::{ProxyDescriptor, parse_proxy};

// HTTP standard types from http crate
pub use ::http::StatusCode;
