//! Synchronous client for the Opendatabot registry API (`/api/v2`).
//!
//! # Overview
//! Every endpoint is a method on `OdbClient` that returns a typed value
//! decoded from the JSON body:
//!
//! ```no_run
//! use odb_core::OdbClient;
//!
//! let client = OdbClient::with_api_key("secret");
//! let owned = client.government_company("31325005")?;
//! println!("{} match(es)", owned.data.count);
//! # Ok::<(), odb_core::ApiError>(())
//! ```
//!
//! # Design
//! - The request path is split into pure steps: `Endpoint::request` resolves
//!   the template, `query::encode` builds the URL, `OdbClient::build_request`
//!   produces an `HttpRequest`, and `OdbClient::parse_response` turns an
//!   `HttpResponse` into the target type. Only the `Transport` does I/O.
//! - `OdbClient` holds immutable configuration and can be shared across
//!   threads.
//! - Response types live in `types`, one module per registry domain.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod query;
pub mod types;

pub use client::{decode, OdbClient};
pub use config::{
    with_api_key, with_base_url, with_transport, ClientConfig, ClientOption, DEFAULT_BASE_URL,
};
pub use endpoint::{resolve, Auth, Endpoint, RequestSpec};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use query::{encode, QueryParams};
