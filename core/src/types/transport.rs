//! Vehicles and transport licenses.

use serde::{Deserialize, Serialize};

use super::{Envelope, Page};

/// `GET /transport`: vehicles found by plate number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transports {
    #[serde(deserialize_with = "super::count")]
    pub count: u64,
    pub data: Vec<VehicleSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSummary {
    pub id: i64,
    pub number: String,
}

/// `GET /transport/{id}`. No envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub id: i64,
    pub number: String,
    pub model: String,
    pub year: String,
    pub date: String,
    pub registration: String,
    pub capacity: i64,
    pub owner_hash: String,
    pub color: String,
    pub kind: String,
    pub body: String,
    pub own_weight: i64,
    pub reg_addr_koatuu: String,
    pub dep_code: String,
    pub dep: String,
}

/// `GET /transport-licenses`.
pub type TransportLicenses = Envelope<Page<TransportLicenseSummary>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportLicenseSummary {
    pub id: i64,
    pub number: String,
    pub license_status: String,
    pub license_issue_date: String,
    pub license_start_date: String,
    pub license_end_date: String,
    pub license_type: String,
}

/// `GET /transport-licenses/{id}`.
pub type TransportLicenseItem = Envelope<TransportLicense>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportLicense {
    pub id: i64,
    pub number: String,
    pub carrier_name: String,
    pub owner_hash: String,
    pub license_status: String,
    pub license_issue_date: String,
    pub license_start_date: String,
    pub license_end_date: String,
    pub license_type: String,
    pub transport_type: String,
    pub transport_status: String,
    pub transport_vendor: String,
    pub transport_model: String,
    pub transport_year: String,
    pub transport_seats: String,
    pub vin: String,
    pub code: String,
}
