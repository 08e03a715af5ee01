//! Loading request options from configuration data
//!
//! Keys and shapes follow the context map callers already pass around:
//! timeouts in (fractional) seconds, `fields` as a string or a map, and
//! `headers` as a map or a list of raw lines and `[name, value]` pairs.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::http::Fields;

/// Deserialize a timeout given in seconds; `0` leaves it unset.
pub fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    struct SecondsVisitor;

    impl<'de> Visitor<'de> for SecondsVisitor {
        type Value = Duration;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative number of seconds")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
            Ok(Duration::from_secs(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
            u64::try_from(v)
                .map(Duration::from_secs)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Duration, E> {
            Duration::try_from_secs_f64(v)
                .map_err(|_| E::invalid_value(de::Unexpected::Float(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Duration, E> {
            Ok(Duration::ZERO)
        }

        fn visit_none<E: de::Error>(self) -> Result<Duration, E> {
            Ok(Duration::ZERO)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Duration, D::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(SecondsVisitor)
}

/// A field value as it may appear in configuration data.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Bool(true) => "1".to_owned(),
            Scalar::Bool(false) => "0".to_owned(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Fields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an encoded string, a map of fields or a list of pairs")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Fields, E> {
                Ok(Fields::Raw(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Fields, E> {
                Ok(Fields::Raw(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Fields, E> {
                Ok(Fields::None)
            }

            fn visit_none<E: de::Error>(self) -> Result<Fields, E> {
                Ok(Fields::None)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Fields, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Scalar>()? {
                    pairs.push((key, value.into_string()));
                }
                Ok(Fields::Form(pairs))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Fields, A::Error> {
                let mut pairs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some((key, value)) = seq.next_element::<(String, Scalar)>()? {
                    pairs.push((key, value.into_string()));
                }
                Ok(Fields::Form(pairs))
            }
        }

        deserializer.deserialize_any(FieldsVisitor)
    }
}

/// One item of a header list: a raw line or a `[name, value]` pair.
#[derive(Deserialize)]
#[serde(untagged)]
enum HeaderItem {
    Raw(String),
    Pair(String, String),
}

/// Deserialize header entries from a map or a list, preserving order.
pub fn header_entries<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, String)>, D::Error> {
    struct HeadersVisitor;

    impl<'de> Visitor<'de> for HeadersVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of headers or a list of header lines")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element::<HeaderItem>()? {
                entries.push(match item {
                    HeaderItem::Raw(line) => (String::new(), line),
                    HeaderItem::Pair(name, value) => (name, value),
                });
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(HeadersVisitor)
}
