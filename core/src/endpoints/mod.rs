//! The endpoint catalog: one typed method on `OdbClient` per service endpoint.
//!
//! # Design
//! Every method follows the same steps:
//! take the endpoint constant (template, auth requirement, response type),
//! call `Endpoint::request` with the path identifiers, add fixed lookup values
//! and the optional filters from a typed parameter struct, then hand the
//! resulting `RequestSpec` to `OdbClient::fetch`.
//!
//! Optional filters are `Option` fields; `None` leaves the parameter out of
//! the query. All parameter structs implement `Default`, so
//! `&Default::default()` means "no filters".

pub mod account;
pub mod company;
pub mod court;
pub mod koatuu;
pub mod penalty;
pub mod person;
pub mod realty;
pub mod timeline;
pub mod transport;

pub use account::*;
pub use company::*;
pub use court::*;
pub use koatuu::*;
pub use penalty::*;
pub use person::*;
pub use realty::*;
pub use timeline::*;
pub use transport::*;
