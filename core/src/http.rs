//! HTTP transport types and the blocking transport used by `OdbClient`.
//!
//! # Design
//! Requests and responses are plain data. `OdbClient::build_request` produces
//! an `HttpRequest` and `OdbClient::parse_response` consumes an
//! `HttpResponse`; a `Transport` sits between the two. Callers that want to
//! run the I/O themselves can skip the transport and feed responses straight
//! into `parse_response`.
//!
//! The only method the service speaks is GET, so the request carries no
//! method or body.

use std::fmt;

use crate::error::ApiError;

/// A GET request described as plain data. `url` already carries the encoded
/// query string, including the API key when one is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes one `HttpRequest` and returns the raw response.
///
/// Implementations must return non-200 responses as data, not as `Err`; the
/// client interprets the status itself. `Err` is reserved for transport
/// failures and should be `ApiError::Network`.
pub trait Transport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Default transport backed by a `ureq::Agent`.
///
/// No timeout is configured: a call blocks until the agent's own defaults
/// give up.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        // ureq caps bodies at 10 MiB unless told otherwise.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Canonical reason phrase for `status`, or an empty string for codes that
/// have none.
pub fn reason_phrase(status: u16) -> String {
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_string()
}
