//! Core request option types and default implementations
//!
//! - `types`: the `RequestOptions` struct with one field per recognised option
//! - `enums`: the proxy type selector
//! - `defaults`: documented default values
//! - `builders`: fluent `with_*` methods
//! - `deserialize`: loading options from configuration data

pub mod builders;
pub mod defaults;
pub mod deserialize;
pub mod enums;
pub mod types;

pub use enums::ProxyType;
pub use types::RequestOptions;
