//! Companies and sole proprietors (FOP).

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{
    Audit, CompanyChanges, CompanyInfo, FopDpa, GovernmentCompany, InspectionItem, Inspections,
    Pdf, Permits, Registration, Registrations, Singletax, Vat, Wagedebt,
};

pub const GOVERNMENT_COMPANIES: Endpoint<GovernmentCompany> =
    Endpoint::new("/government-companies");
pub const DPA: Endpoint<FopDpa> = Endpoint::new("/dpa/{}");
pub const COMPANY: Endpoint<Vec<CompanyInfo>> = Endpoint::new("/company/{}");
pub const CHANGES: Endpoint<Vec<CompanyChanges>> = Endpoint::new("/changed/{}");
pub const WAGEDEBT: Endpoint<Wagedebt> = Endpoint::new("/wagedebt/{}");
pub const AUDIT: Endpoint<Vec<Audit>> = Endpoint::new("/audit");
pub const AUDIT_BY_ID: Endpoint<Vec<Audit>> = Endpoint::new("/audit/{}");
pub const REGISTRATIONS: Endpoint<Registrations> = Endpoint::new("/registrations");
pub const REGISTRATION_BY_ID: Endpoint<Registration> = Endpoint::new("/registrations/{}");
pub const INSPECTIONS: Endpoint<Inspections> = Endpoint::new("/inspections");
pub const INSPECTION_BY_ID: Endpoint<InspectionItem> = Endpoint::new("/inspections/{}");
pub const PDF: Endpoint<Pdf> = Endpoint::new("/pdf/{}");
pub const PERMITS: Endpoint<Permits> = Endpoint::new("/permits");
pub const SINGLETAX: Endpoint<Singletax> = Endpoint::new("/singletax");
pub const VAT: Endpoint<Vat> = Endpoint::new("/vat");

/// Filters for `changes`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangesParams {
    /// Only changes since this date.
    pub from: Option<String>,
}

/// Filters for `audit`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditParams {
    /// EDRPOU code.
    pub code: Option<String>,
    /// Full name of the sole proprietor.
    pub pib: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Filters for `registrations`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationsParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// `company` or `fop`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// `YYYY-MM-DD`.
    pub reg_date_from: Option<String>,
    /// `YYYY-MM-DD`.
    pub reg_date_to: Option<String>,
    /// Activity codes joined with `OR`, e.g. `69 OR 96`.
    pub activities: Option<String>,
    /// Locations joined with `OR`, e.g. `Дніпро OR київ`.
    pub location: Option<String>,
    pub is_phone: Option<bool>,
    pub is_email: Option<bool>,
    /// `ASC` or `DESC`.
    pub sort: Option<String>,
}

/// Filters for `permits`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PermitsParams {
    /// EDRPOU code or individual tax number.
    pub code: Option<String>,
    pub pib: Option<String>,
}

/// Filters for `singletax`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SingletaxParams {
    /// EDRPOU code or individual tax number.
    pub code: Option<String>,
    pub pib: Option<String>,
    pub fophash: Option<String>,
}

/// Filters for `vat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VatParams {
    #[serde(rename = "vatNumber")]
    pub vat_number: Option<String>,
    pub ipn: Option<String>,
    #[serde(rename = "companyCode")]
    pub company_code: Option<String>,
}

impl OdbClient {
    /// Whether the company with EDRPOU `code` belongs to the state.
    pub fn government_company(&self, code: &str) -> Result<GovernmentCompany, ApiError> {
        self.fetch(GOVERNMENT_COMPANIES.request(&[])?.lookup("code", code)?)
    }

    /// Registration and tax data of a sole proprietor by individual tax
    /// number.
    pub fn dpa(&self, code: &str) -> Result<FopDpa, ApiError> {
        self.fetch(DPA.request(&[code])?)
    }

    /// Registration data of a company by EDRPOU code.
    pub fn company(&self, code: &str) -> Result<Vec<CompanyInfo>, ApiError> {
        self.fetch(COMPANY.request(&[code])?)
    }

    /// Registration changes of a company.
    pub fn changes(
        &self,
        code: &str,
        params: &ChangesParams,
    ) -> Result<Vec<CompanyChanges>, ApiError> {
        self.fetch(CHANGES.request(&[code])?.params(params)?)
    }

    /// Wage arrears of a company.
    pub fn wagedebt(&self, code: &str) -> Result<Wagedebt, ApiError> {
        self.fetch(WAGEDEBT.request(&[code])?)
    }

    /// Audits of a company or sole proprietor.
    pub fn audit(&self, params: &AuditParams) -> Result<Vec<Audit>, ApiError> {
        self.fetch(AUDIT.request(&[])?.params(params)?)
    }

    /// One audit by the `audit_id` returned from `audit`.
    pub fn audit_by_id(&self, id: &str) -> Result<Vec<Audit>, ApiError> {
        self.fetch(AUDIT_BY_ID.request(&[id])?)
    }

    /// Newly registered companies and sole proprietors.
    pub fn registrations(&self, params: &RegistrationsParams) -> Result<Registrations, ApiError> {
        self.fetch(REGISTRATIONS.request(&[])?.params(params)?)
    }

    /// One new registration by the internal id returned from `registrations`.
    pub fn registration(&self, id: &str) -> Result<Registration, ApiError> {
        self.fetch(REGISTRATION_BY_ID.request(&[id])?)
    }

    /// Inspections of a company by regulatory bodies.
    pub fn inspections(&self, code: &str) -> Result<Inspections, ApiError> {
        self.fetch(INSPECTIONS.request(&[])?.lookup("code", code)?)
    }

    /// One inspection by the id returned from `inspections`.
    pub fn inspection(&self, id: &str) -> Result<InspectionItem, ApiError> {
        self.fetch(INSPECTION_BY_ID.request(&[id])?)
    }

    /// Link to the registry extract PDF of a company.
    pub fn pdf(&self, code: &str) -> Result<Pdf, ApiError> {
        self.fetch(PDF.request(&[code])?)
    }

    /// Licenses and permits.
    pub fn permits(&self, params: &PermitsParams) -> Result<Permits, ApiError> {
        self.fetch(PERMITS.request(&[])?.params(params)?)
    }

    /// Single tax payers.
    pub fn singletax(&self, params: &SingletaxParams) -> Result<Singletax, ApiError> {
        self.fetch(SINGLETAX.request(&[])?.params(params)?)
    }

    /// VAT payer status.
    pub fn vat(&self, params: &VatParams) -> Result<Vat, ApiError> {
        self.fetch(VAT.request(&[])?.params(params)?)
    }
}
