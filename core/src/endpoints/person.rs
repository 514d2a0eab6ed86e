//! Registers of natural persons.

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{
    Aliments, CorruptOfficialItem, CorruptOfficials, LawyerItem, Lawyers, Passports, Wanted,
};

pub const ALIMENT: Endpoint<Aliments> = Endpoint::new("/aliment");
pub const LAWYERS: Endpoint<Lawyers> = Endpoint::new("/lawyers");
pub const LAWYER_BY_ID: Endpoint<LawyerItem> = Endpoint::new("/lawyers/{}");
pub const CORRUPT_OFFICIALS: Endpoint<CorruptOfficials> = Endpoint::new("/corrupt-officials");
pub const CORRUPT_OFFICIAL_BY_ID: Endpoint<CorruptOfficialItem> =
    Endpoint::new("/corrupt-officials/{}");
pub const PASSPORT: Endpoint<Passports> = Endpoint::new("/passport");
pub const WANTED: Endpoint<Wanted> = Endpoint::new("/wanted");

/// Filters for `aliment`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlimentParams {
    pub start: Option<u32>,
    pub birth_date: Option<String>,
    pub limit: Option<u32>,
}

/// Filters for `lawyers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LawyersParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// Full name.
    pub name: Option<String>,
}

/// Paging for the searches by full name: `corrupt_officials` and `wanted`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonSearchParams {
    pub start: Option<u32>,
    pub limit: Option<u32>,
}

impl OdbClient {
    /// Alimony debtors by full name.
    pub fn aliment(&self, pib: &str, params: &AlimentParams) -> Result<Aliments, ApiError> {
        self.fetch(ALIMENT.request(&[])?.params(params)?.param("pib", pib))
    }

    /// Search the unified register of lawyers.
    pub fn lawyers(&self, params: &LawyersParams) -> Result<Lawyers, ApiError> {
        self.fetch(LAWYERS.request(&[])?.params(params)?)
    }

    /// One lawyer by the id returned from `lawyers`.
    pub fn lawyer(&self, id: &str) -> Result<LawyerItem, ApiError> {
        self.fetch(LAWYER_BY_ID.request(&[id])?)
    }

    /// Persons who committed corruption offences.
    pub fn corrupt_officials(
        &self,
        pib: &str,
        params: &PersonSearchParams,
    ) -> Result<CorruptOfficials, ApiError> {
        self.fetch(CORRUPT_OFFICIALS.request(&[])?.params(params)?.param("pib", pib))
    }

    /// One record by the internal id returned from `corrupt_officials`.
    pub fn corrupt_official(&self, id: &str) -> Result<CorruptOfficialItem, ApiError> {
        self.fetch(CORRUPT_OFFICIAL_BY_ID.request(&[id])?)
    }

    /// Lost and invalid passports, e.g. number `CP634742`.
    pub fn passport(&self, number: &str) -> Result<Passports, ApiError> {
        self.fetch(PASSPORT.request(&[])?.lookup("number", number)?)
    }

    /// Persons on the wanted list.
    pub fn wanted(&self, pib: &str, params: &PersonSearchParams) -> Result<Wanted, ApiError> {
        self.fetch(WANTED.request(&[])?.params(params)?.param("pib", pib))
    }
}
