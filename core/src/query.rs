//! Query parameters and URL encoding.
//!
//! # Design
//! Parameters live in a `BTreeMap`, so keys are unique and the encoded query
//! is the same for the same input. The order is sorted key order, which the
//! service does not care about and callers must not rely on.
//!
//! The configured API key is written into the map under `apiKey` on every
//! call, after the caller's parameters, so it always wins over a
//! caller-supplied `apiKey`. Empty values are sent as-is; leaving a parameter
//! out is done by not inserting it (a `None` field in a typed struct).

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ApiError;

/// Reserved query key that carries the API key.
pub const API_KEY_PARAM: &str = "apiKey";

/// Key to value map of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`; keys from `other` win.
    pub fn extend(&mut self, other: QueryParams) {
        self.0.extend(other.0);
    }

    /// Flatten a typed parameter struct into query parameters.
    ///
    /// Strings are taken as-is, numbers are formatted, booleans become `1`
    /// or `0` and `null` (a `None` field) is left out. Nested arrays or
    /// objects have no query representation and are rejected.
    pub fn from_serialize<P: Serialize>(params: &P) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(ApiError::Serialization(format!(
                    "query parameters must be a struct or map, got {other}"
                )))
            }
        };

        let mut query = Self::new();
        for (key, value) in object {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => String::from(if b { "1" } else { "0" }),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ApiError::Serialization(format!(
                        "query parameter `{key}` is not a scalar"
                    )))
                }
            };
            query.insert(key, value);
        }
        Ok(query)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Append `params`, plus `apiKey` when `api_key` is non-empty, to `base_url`
/// as a form-urlencoded query string.
pub fn encode(base_url: &str, params: &QueryParams, api_key: &str) -> Result<String, ApiError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ApiError::Validation(format!("invalid endpoint url `{base_url}`: {e}")))?;

    let mut params = params.clone();
    if !api_key.is_empty() {
        params.insert(API_KEY_PARAM, api_key);
    }

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn government_companies_round_trip() {
        let params: QueryParams = [("code", "31325005")].into_iter().collect();
        let url = encode("https://host/api/v2/government-companies", &params, "K").unwrap();

        assert!(url.starts_with("https://host/api/v2/government-companies?"));
        let pairs = pairs(&url);
        assert!(pairs.contains(&("code".to_string(), "31325005".to_string())));
        assert!(pairs.contains(&("apiKey".to_string(), "K".to_string())));
    }

    #[test]
    fn configured_key_overrides_caller_api_key() {
        let params: QueryParams = [("apiKey", "caller"), ("limit", "10")].into_iter().collect();
        let url = encode("https://host/api/v2/audit", &params, "configured").unwrap();

        let keys: Vec<_> = pairs(&url).into_iter().filter(|(k, _)| k == API_KEY_PARAM).collect();
        assert_eq!(keys, vec![("apiKey".to_string(), "configured".to_string())]);
    }

    #[test]
    fn empty_api_key_is_not_injected() {
        let url = encode("https://host/api/v2/koatuu/regions", &QueryParams::new(), "").unwrap();
        assert_eq!(url, "https://host/api/v2/koatuu/regions");
    }

    #[test]
    fn empty_values_are_kept() {
        let params: QueryParams = [("pib", "")].into_iter().collect();
        let url = encode("https://host/api/v2/wanted", &params, "").unwrap();
        assert_eq!(pairs(&url), vec![("pib".to_string(), String::new())]);
    }

    #[test]
    fn values_are_percent_encoded() {
        let params: QueryParams = [("pib", "Петров Іван"), ("q", "a&b=c")]
            .into_iter()
            .collect();
        let url = encode("https://host/api/v2/wanted", &params, "").unwrap();

        assert!(!url.contains(' '));
        assert!(url.contains("q=a%26b%3Dc"));
        let pairs = pairs(&url);
        assert!(pairs.contains(&("pib".to_string(), "Петров Іван".to_string())));
    }

    #[test]
    fn encode_is_deterministic() {
        let a: QueryParams = [("b", "2"), ("a", "1")].into_iter().collect();
        let b: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(
            encode("https://host/x", &a, "K").unwrap(),
            encode("https://host/x", &b, "K").unwrap()
        );
    }

    #[test]
    fn invalid_base_url_is_validation_error() {
        let err = encode("not a url", &QueryParams::new(), "K").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[derive(Serialize)]
    struct Search {
        offset: Option<u32>,
        limit: Option<u32>,
        name: Option<String>,
        is_phone: Option<bool>,
    }

    #[test]
    fn from_serialize_skips_none_and_formats_scalars() {
        let query = QueryParams::from_serialize(&Search {
            offset: None,
            limit: Some(50),
            name: Some("Суд".to_string()),
            is_phone: Some(true),
        })
        .unwrap();

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("limit"), Some("50"));
        assert_eq!(query.get("name"), Some("Суд"));
        assert_eq!(query.get("is_phone"), Some("1"));
        assert_eq!(query.get("offset"), None);
    }

    #[test]
    fn from_serialize_rejects_nested_values() {
        #[derive(Serialize)]
        struct Nested {
            ids: Vec<u32>,
        }
        let err = QueryParams::from_serialize(&Nested { ids: vec![1] }).unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
