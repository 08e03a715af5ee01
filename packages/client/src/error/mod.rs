//! Caller-facing errors and the transport error table

pub mod classification;
pub mod codes;
pub mod constructors;
pub mod types;

pub use codes::{ErrorCode, TransportError};
pub use constructors::*;
pub use types::{Error, Result};
