//! Request dispatch shared by every endpoint method.
//!
//! # Design
//! `OdbClient` owns an immutable `ClientConfig` and runs one pipeline for all
//! endpoints:
//!
//! 1. pre-checks (path identifiers in `Endpoint::request`, API key here),
//! 2. URL encoding with the API key injected,
//! 3. one GET through the configured `Transport`,
//! 4. status check (anything but 200 fails, body discarded),
//! 5. JSON decoding into the type the endpoint declares.
//!
//! Steps 2 and 4–5 are also public as `build_request` and `parse_response`
//! so a caller can execute the HTTP round trip on its own.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{instrument, Span};

use crate::config::{ClientConfig, ClientOption};
use crate::endpoint::RequestSpec;
use crate::error::ApiError;
use crate::http::{reason_phrase, HttpRequest, HttpResponse};
use crate::query;

/// Synchronous client for the Opendatabot API.
///
/// Cheap to clone and safe to share between threads; every call blocks the
/// calling thread for the full round trip.
#[derive(Debug, Clone)]
pub struct OdbClient {
    config: ClientConfig,
}

impl OdbClient {
    /// Build a client from options applied in order.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ClientOption>>,
    {
        Self::from_config(ClientConfig::build(options))
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new([crate::config::with_api_key(api_key)])
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run the pre-checks and produce the GET request for `spec`.
    pub fn build_request<T>(&self, spec: &RequestSpec<T>) -> Result<HttpRequest, ApiError> {
        if spec.requires_api_key() && self.config.api_key().is_empty() {
            return Err(ApiError::Validation("api key is not specified".to_string()));
        }

        let base = format!("{}{}", self.config.base_url(), spec.path());
        let url = query::encode(&base, spec.query(), self.config.api_key())?;
        Ok(HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Check the status and decode the body into `T`.
    pub fn parse_response<T: DeserializeOwned + Default>(
        &self,
        response: HttpResponse,
    ) -> Result<T, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Execute `spec` through the configured transport and decode the body.
    #[instrument(
        name = "odb_request",
        level = "debug",
        skip_all,
        fields(path = spec.path(), status = tracing::field::Empty)
    )]
    pub fn fetch<T>(&self, spec: RequestSpec<T>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.build_request(&spec)?;
        let response = self.config.transport().get(&request)?;
        Span::current().record("status", response.status);
        self.parse_response(response)
    }
}

/// Anything but 200 is an error carrying the status and its reason phrase.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        reason: reason_phrase(response.status),
    })
}

/// Deserialize a JSON body into `T`.
///
/// Unknown fields are ignored by the response types, and `null` values are
/// dropped before deserializing so they fall back to the field default just
/// like a missing field. A `null` body decodes to `T::default()`; `null`
/// array elements are skipped.
pub fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    tracing::trace!(bytes = body.len(), "decoding response body");
    let mut value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if value.is_null() {
        return Ok(T::default());
    }
    prune_nulls(&mut value);
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(prune_nulls);
        }
        _ => {}
    }
}
