//! Request configuration
//!
//! [`RequestOptions`] is the structured replacement for a loosely-typed
//! context map: every recognised option is an explicit field with a
//! documented default, loadable through `serde` or built fluently.

pub mod core;
pub mod timeouts;

pub use self::core::{ProxyType, RequestOptions};
pub use timeouts::ResolvedTimeouts;
