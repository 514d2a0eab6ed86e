//! KOATUU administrative-territorial classifier.

use serde::{Deserialize, Serialize};

use super::Envelope;

/// `GET /koatuu/regions`: top-level regions.
pub type KoatuuRegions = Envelope<Vec<KoatuuUnit>>;

/// `GET /koatuu/regions/{code}`: one unit with its subdivisions.
pub type Koatuu = Envelope<KoatuuRegion>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoatuuUnit {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoatuuRegion {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub items: KoatuuSubdivisions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoatuuSubdivisions {
    #[serde(rename = "region-district")]
    pub region_district: Vec<KoatuuUnit>,
    #[serde(rename = "city-and-district")]
    pub city_and_district: Vec<KoatuuUnit>,
    pub city: Vec<KoatuuCity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoatuuCity {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub districts: Vec<KoatuuUnit>,
}
