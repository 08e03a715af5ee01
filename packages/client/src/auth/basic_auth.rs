//! Basic authentication utilities

use std::io::Write;

use base64::prelude::BASE64_STANDARD;
use base64::write::EncoderWriter;
use http::HeaderValue;

use crate::error::{Error, Result};

/// Build a sensitive `Authorization` value from `user:password` credentials.
///
/// The credentials are encoded verbatim, so a string without `:` is sent as
/// a username with an empty password.
///
/// # Errors
///
/// Returns `InvalidArgument` if the encoded value is not a valid header.
pub fn basic_auth(user_password: &str) -> Result<HeaderValue> {
    let mut buf = b"Basic ".to_vec();
    {
        let mut encoder = EncoderWriter::new(&mut buf, &BASE64_STANDARD);
        encoder
            .write_all(user_password.as_bytes())
            .and_then(|()| encoder.finish().map(|_| ()))
            .map_err(|e| Error::InvalidArgument(format!("credentials cannot be encoded: {e}")))?;
    }
    let mut header = HeaderValue::from_bytes(&buf).map_err(|_e| {
        Error::InvalidArgument("credentials do not form a valid authorization header".to_owned())
    })?;
    header.set_sensitive(true);
    Ok(header)
}
