//! Enforcement proceedings and the register of debtors.

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{
    FullPenalties, FullPenaltyDoc, Penalties, PenaltiesByName, PenaltyItem, Performers,
};

pub const FULL_PENALTY_BY_NUMBER: Endpoint<FullPenalties> = Endpoint::new("/full-penalty/{}");
pub const FULL_PENALTY_DOC: Endpoint<FullPenaltyDoc> = Endpoint::new("/full-penalty-doc/{}");
pub const FULL_PENALTY: Endpoint<FullPenalties> = Endpoint::new("/full-penalty");
pub const PERFORMER: Endpoint<Performers> = Endpoint::new("/performer");
pub const PENALTIES_BY_CODE: Endpoint<Penalties> = Endpoint::new("/penalties/{}");
pub const PENALTY_BY_NUMBER: Endpoint<PenaltyItem> = Endpoint::new("/penalty/{}");
pub const PENALTIES: Endpoint<PenaltiesByName> = Endpoint::new("/penalties");

/// Source selector for `full_penalty`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FullPenaltySourceParams {
    /// `opendatabot` reads from the service's own copy of the register.
    pub source: Option<String>,
}

/// Filters for `full_penalties`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FullPenaltyParams {
    pub borrower_code: Option<String>,
    pub creditor_code: Option<String>,
    pub borrower_first_name: Option<String>,
    pub borrower_last_name: Option<String>,
    pub borrower_middle_name: Option<String>,
    pub borrower_birth_date: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub source: Option<String>,
}

/// Filters for `performers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformerParams {
    /// Name of the enforcement service or of the private executor.
    pub name: Option<String>,
    pub region_id: Option<u32>,
    /// `government` or `private`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// Filters for `penalties_by_code`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PenaltiesByCodeParams {
    /// Proceeding category, `01` recovery of funds to `24` enforcement fee.
    #[serde(rename = "categories[1]")]
    pub category: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// Filters for `penalties`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PenaltiesParams {
    pub middle_name: Option<String>,
    #[serde(rename = "categories[1]")]
    pub category: Option<String>,
}

impl OdbClient {
    /// An enforcement proceeding by its number.
    pub fn full_penalty(
        &self,
        number: &str,
        params: &FullPenaltySourceParams,
    ) -> Result<FullPenalties, ApiError> {
        self.fetch(FULL_PENALTY_BY_NUMBER.request(&[number])?.params(params)?)
    }

    /// Proceeding documents, unlocked with the access `secret`.
    pub fn full_penalty_doc(&self, number: &str, secret: &str) -> Result<FullPenaltyDoc, ApiError> {
        self.fetch(FULL_PENALTY_DOC.request(&[number])?.param("secret", secret))
    }

    /// Search enforcement proceedings by debtor or creditor.
    pub fn full_penalties(&self, params: &FullPenaltyParams) -> Result<FullPenalties, ApiError> {
        self.fetch(FULL_PENALTY.request(&[])?.params(params)?)
    }

    /// State enforcement services and private executors.
    pub fn performers(&self, params: &PerformerParams) -> Result<Performers, ApiError> {
        self.fetch(PERFORMER.request(&[])?.params(params)?)
    }

    /// Register of debtors by EDRPOU code.
    pub fn penalties_by_code(
        &self,
        code: &str,
        params: &PenaltiesByCodeParams,
    ) -> Result<Penalties, ApiError> {
        self.fetch(PENALTIES_BY_CODE.request(&[code])?.params(params)?)
    }

    /// One enforcement proceeding by its number.
    pub fn penalty(&self, number: &str) -> Result<PenaltyItem, ApiError> {
        self.fetch(PENALTY_BY_NUMBER.request(&[number])?)
    }

    /// Register of debtors by name and birth date (`YYYY-MM-DD`).
    pub fn penalties(
        &self,
        first_name: &str,
        last_name: &str,
        birth_date: &str,
        params: &PenaltiesParams,
    ) -> Result<PenaltiesByName, ApiError> {
        self.fetch(
            PENALTIES
                .request(&[])?
                .params(params)?
                .param("first_name", first_name)
                .param("last_name", last_name)
                .param("birth_date", birth_date),
        )
    }
}
