//! # Requests Client
//!
//! Blocking outbound HTTP requests for remote URLs: a `file_get_contents`
//! style call that also carries request bodies, custom headers, basic-auth
//! credentials, proxies and timeouts, and reports the body, status code,
//! timing and transport error of each call.
//!
//! ## Features
//!
//! - **GET/POST/PUT/PATCH/DELETE** with form-encoded or raw fields
//! - **Ordered header lines**, named or raw
//! - **HTTP, SOCKS4 and SOCKS5 proxies** from a single proxy URL
//! - **Transport errors as data** with stable error numbers and text
//! - **Pluggable transport**, `ureq` by default
//!
//! ## Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use requests_client::{RequestClient, RequestOptions};
//!
//! fn main() -> requests_client::Result<()> {
//!     let client = RequestClient::new()?;
//!     let options = RequestOptions::new()
//!         .with_fields([("q", "rust")])
//!         .with_header("Accept", "text/html")
//!         .with_timeout(Duration::from_secs(10));
//!
//!     let result = client.get("https://example.com/search", &options)?;
//!     if result.error_number() == 0 {
//!         println!("{} -> {:?}", result.http_status_code(), result.output());
//!     } else {
//!         eprintln!("{}: {}", result.error_code_message(), result.error_message());
//!     }
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod proxy;
pub mod transport;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
pub use crate::http::PreparedRequest;
pub use crate::transport::{Transport, TransportResponse};
#[cfg(feature = "ureq-transport")]
pub use crate::transport::UreqTransport;
