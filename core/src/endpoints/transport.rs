//! Vehicles and transport licenses.

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{TransportLicenseItem, TransportLicenses, Transports, Vehicle};

pub const TRANSPORT: Endpoint<Transports> = Endpoint::new("/transport");
pub const TRANSPORT_BY_ID: Endpoint<Vehicle> = Endpoint::new("/transport/{}");
pub const TRANSPORT_LICENSES: Endpoint<TransportLicenses> = Endpoint::new("/transport-licenses");
pub const TRANSPORT_LICENSE_BY_ID: Endpoint<TransportLicenseItem> =
    Endpoint::new("/transport-licenses/{}");

/// Filters for `transports`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransportsParams {
    pub start: Option<u32>,
    pub limit: Option<u32>,
    /// Plate number.
    pub number: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
}

/// Filters for `transport_licenses`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransportLicensesParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub number: Option<String>,
    /// EDRPOU code or individual tax number of the carrier.
    pub code: Option<String>,
    pub owner_hash: Option<String>,
}

impl OdbClient {
    /// Search vehicles by plate number.
    pub fn transports(&self, params: &TransportsParams) -> Result<Transports, ApiError> {
        self.fetch(TRANSPORT.request(&[])?.params(params)?)
    }

    /// One vehicle by the internal id returned from `transports`.
    pub fn transport(&self, id: &str) -> Result<Vehicle, ApiError> {
        self.fetch(TRANSPORT_BY_ID.request(&[id])?)
    }

    /// Licenses for passenger and cargo carriage.
    pub fn transport_licenses(
        &self,
        params: &TransportLicensesParams,
    ) -> Result<TransportLicenses, ApiError> {
        self.fetch(TRANSPORT_LICENSES.request(&[])?.params(params)?)
    }

    /// One carriage license by the id returned from `transport_licenses`.
    pub fn transport_license(&self, id: &str) -> Result<TransportLicenseItem, ApiError> {
        self.fetch(TRANSPORT_LICENSE_BY_ID.request(&[id])?)
    }
}
