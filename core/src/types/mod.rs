//! Response shapes for the Opendatabot endpoints.
//!
//! # Design
//! The service is the owner of these contracts; the structs here only pick
//! out the fields the client exposes. Every struct is `#[serde(default)]` so
//! a missing field decodes to its default, and unknown fields are ignored so
//! additions on the service side do not break decoding.
//!
//! Envelopes differ per endpoint. Most wrap the payload as
//! `{"status": ..., "data": ...}` (`Envelope<T>`), list payloads add
//! `{"count": ..., "items": [...]}` (`Page<T>`), and a few return a bare
//! object or array. Each catalog entry names its exact shape.

use serde::{Deserialize, Deserializer, Serialize};

mod account;
mod company;
mod court;
mod koatuu;
mod penalty;
mod person;
mod realty;
mod timeline;
mod transport;

pub use account::*;
pub use company::*;
pub use court::*;
pub use koatuu::*;
pub use penalty::*;
pub use person::*;
pub use realty::*;
pub use timeline::*;
pub use transport::*;

/// The `{"status": ..., "data": ...}` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

/// The `{"count": ..., "items": [...]}` list payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    #[serde(deserialize_with = "count")]
    pub count: u64,
    pub items: Vec<T>,
}

/// A code/name pair used for case participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub code: String,
    pub name: String,
}

/// List counters arrive either as numbers or as numeric strings depending on
/// the endpoint. An empty string counts as zero.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) if s.trim().is_empty() => Ok(0),
        Count::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid count `{s}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Item {
        code: String,
    }

    #[test]
    fn page_count_accepts_number_or_string() {
        let numeric: Page<Item> = serde_json::from_str(r#"{"count":3,"items":[]}"#).unwrap();
        let textual: Page<Item> = serde_json::from_str(r#"{"count":"3","items":[]}"#).unwrap();
        let empty: Page<Item> = serde_json::from_str(r#"{"count":"","items":[]}"#).unwrap();
        assert_eq!(numeric.count, 3);
        assert_eq!(textual.count, 3);
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn page_count_rejects_garbage() {
        let result: Result<Page<Item>, _> = serde_json::from_str(r#"{"count":"many"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_ignores_unknown_fields() {
        let envelope: Envelope<Page<Item>> = serde_json::from_str(
            r#"{"status":"ok","meta":{"x":1},"data":{"count":1,"items":[{"code":"1","name":"n"}]}}"#,
        )
        .unwrap();
        assert_eq!(envelope.status, "ok");
        assert_eq!(envelope.data.items[0].code, "1");
    }
}
