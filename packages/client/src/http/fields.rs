//! Request field payloads and their encoding

use crate::error::{self, Result};

/// Request payload: sent as the query string for GET, as the body otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fields {
    /// No payload.
    #[default]
    None,
    /// Already-encoded payload, sent unchanged.
    Raw(String),
    /// Key/value pairs, form-urlencoded in insertion order.
    Form(Vec<(String, String)>),
}

impl Fields {
    /// Encode the payload; `None` when there is nothing to send.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the pairs cannot be form-encoded.
    pub fn encode(&self) -> Result<Option<String>> {
        match self {
            Fields::None => Ok(None),
            Fields::Raw(raw) => Ok(Some(raw.clone())),
            Fields::Form(pairs) => serde_urlencoded::to_string(pairs)
                .map(Some)
                .map_err(error::invalid_fields),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Fields::None => true,
            Fields::Raw(raw) => raw.is_empty(),
            Fields::Form(pairs) => pairs.is_empty(),
        }
    }
}

impl From<&str> for Fields {
    fn from(raw: &str) -> Self {
        Fields::Raw(raw.to_owned())
    }
}

impl From<String> for Fields {
    fn from(raw: String) -> Self {
        Fields::Raw(raw)
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Fields {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Fields {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields::Form(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
