//! Error types for the Opendatabot client.
//!
//! # Design
//! Every failure is returned to the immediate caller; nothing is retried,
//! logged or swallowed inside the client. `Validation` is the only kind that
//! is raised before any network I/O. A non-200 response keeps only the status
//! code and its reason phrase; the body is dropped.

use thiserror::Error;

/// Errors returned by `OdbClient` and the request pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required identifier or the API key was empty, or the endpoint URL
    /// could not be parsed. Raised before any request is sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The transport could not complete the round trip (DNS, connection
    /// refused, broken body read).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a status other than 200.
    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Typed request parameters could not be turned into a query string.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Status code of an `HttpStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
