//! Court register.

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{
    Accused, CompanyCourtCase, CompanyCourts, CourtCase, CourtDecisions, CourtDocument,
    Institutions, Schedule, ScheduleItem,
};

pub const COURT: Endpoint<CourtDecisions> = Endpoint::new("/court");
pub const INSTITUTIONS: Endpoint<Institutions> = Endpoint::public("/institutions");
pub const COURT_BY_ID: Endpoint<CourtDocument> = Endpoint::new("/court/{}");
pub const SCHEDULE: Endpoint<Schedule> = Endpoint::new("/schedule");
pub const ACCUSED: Endpoint<Accused> = Endpoint::new("/accused");
pub const SCHEDULE_BY_ID: Endpoint<ScheduleItem> = Endpoint::new("/schedule/{}");
pub const COMPANY_COURTS: Endpoint<CompanyCourts> = Endpoint::new("/company-courts");
pub const COMPANY_COURTS_BY_TYPE: Endpoint<CompanyCourtCase> =
    Endpoint::new("/company-courts/{}");
pub const COURT_CASES: Endpoint<CourtCase> = Endpoint::new("/court-cases/{}");

/// Filters for `court_decisions`.
///
/// `judgment_code`: 1 civil, 2 criminal, 3 commercial, 4 administrative,
/// 5 administrative offence. `justice_code`: 1 verdict, 2 resolution,
/// 3 decision, 4 court order, 5 ruling, 6 separate ruling, 10 dissenting
/// opinion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourtParams {
    pub judgment_code: Option<u32>,
    pub justice_code: Option<u32>,
    /// Court code from `institutions`.
    pub court_code: Option<String>,
    pub company_code: Option<String>,
    /// Full-text search in the decision.
    pub text: Option<String>,
    /// `first`, `appeal` or `cassation`.
    pub stage: Option<String>,
    pub text_intro: Option<String>,
    pub text_resolution: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// Case number.
    pub number: Option<String>,
    /// `words_in_a_row` requires the words of `text` to follow each other.
    pub search_criteria: Option<String>,
}

/// Filters for `institutions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstitutionsParams {
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// Filters for `schedule`. Regions are numbered 1 (Crimea) to 27
/// (Sevastopol), with 26 for Kyiv city.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleParams {
    pub text_involved: Option<String>,
    pub text_description: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "courtId")]
    pub court_id: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub judgment_code: Option<u32>,
    pub number: Option<String>,
    /// `Y-m-d`.
    pub date_from: Option<String>,
    /// `Y-m-d`.
    pub date_to: Option<String>,
    pub region_id: Option<u32>,
}

/// Filters for `accused`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccusedParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub judgment_code: Option<u32>,
    /// Article of the Criminal Code or the Code of Administrative Offences.
    pub article: Option<String>,
    pub region_id: Option<u32>,
    pub pib: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Filters for `company_courts_by_type`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyCourtsParams {
    pub sort_field: Option<String>,
    /// `DESC` or `ASC`.
    pub sort_type: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub offset: Option<u32>,
    /// At most 1000.
    pub limit: Option<u32>,
}

/// Filters for `court_case`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourtCaseParams {
    /// Needed when the number matches cases of several proceeding kinds.
    pub judgment_code: Option<u32>,
}

impl OdbClient {
    /// Search court decisions.
    pub fn court_decisions(&self, params: &CourtParams) -> Result<CourtDecisions, ApiError> {
        self.fetch(COURT.request(&[])?.params(params)?)
    }

    /// Courts and their codes. Works without an API key.
    pub fn institutions(&self, params: &InstitutionsParams) -> Result<Institutions, ApiError> {
        self.fetch(INSTITUTIONS.request(&[])?.params(params)?)
    }

    /// One court decision with its text.
    pub fn court_decision(&self, id: &str) -> Result<CourtDocument, ApiError> {
        self.fetch(COURT_BY_ID.request(&[id])?)
    }

    /// Scheduled court hearings.
    pub fn schedule(&self, params: &ScheduleParams) -> Result<Schedule, ApiError> {
        self.fetch(SCHEDULE.request(&[])?.params(params)?)
    }

    /// Criminal and administrative cases by accused person.
    pub fn accused(&self, params: &AccusedParams) -> Result<Accused, ApiError> {
        self.fetch(ACCUSED.request(&[])?.params(params)?)
    }

    /// One scheduled hearing by the id returned from `schedule`.
    pub fn schedule_item(&self, id: &str) -> Result<ScheduleItem, ApiError> {
        self.fetch(SCHEDULE_BY_ID.request(&[id])?)
    }

    /// Number of court cases of a company per proceeding kind.
    pub fn company_courts(&self, code: &str) -> Result<CompanyCourts, ApiError> {
        self.fetch(COMPANY_COURTS.request(&[])?.lookup("code", code)?)
    }

    /// Court cases of a company of one proceeding kind.
    pub fn company_courts_by_type(
        &self,
        courts_type: &str,
        code: &str,
        params: &CompanyCourtsParams,
    ) -> Result<CompanyCourtCase, ApiError> {
        self.fetch(
            COMPANY_COURTS_BY_TYPE
                .request(&[courts_type])?
                .params(params)?
                .lookup("code", code)?,
        )
    }

    /// A court case by its number.
    pub fn court_case(
        &self,
        number: &str,
        params: &CourtCaseParams,
    ) -> Result<CourtCase, ApiError> {
        self.fetch(COURT_CASES.request(&[number])?.params(params)?)
    }
}
