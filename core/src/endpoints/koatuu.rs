//! KOATUU administrative-territorial classifier. Both endpoints are public.

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{Koatuu, KoatuuRegions};

pub const KOATUU_REGIONS: Endpoint<KoatuuRegions> = Endpoint::public("/koatuu/regions");
pub const KOATUU_REGION: Endpoint<Koatuu> = Endpoint::public("/koatuu/regions/{}");

impl OdbClient {
    /// Top-level KOATUU units (regions and cities with special status).
    pub fn koatuu_regions(&self) -> Result<KoatuuRegions, ApiError> {
        self.fetch(KOATUU_REGIONS.request(&[])?)
    }

    /// Subdivisions of a unit by its 10 or 17 digit code.
    pub fn koatuu_region(&self, code: &str) -> Result<Koatuu, ApiError> {
        self.fetch(KOATUU_REGION.request(&[code])?)
    }
}
