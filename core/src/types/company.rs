//! Companies and sole proprietors (FOP).

use serde::{Deserialize, Serialize};

use super::{Envelope, Page};

/// `GET /government-companies`: the codes that belong to the state.
pub type GovernmentCompany = Envelope<Page<CompanyCode>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyCode {
    pub code: String,
}

/// `GET /dpa/{code}`: sole proprietor registration and tax data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FopDpa {
    pub code: String,
    pub full_name: String,
    pub status: String,
    pub phones: Vec<String>,
    pub email: String,
    pub registration_date: String,
    pub registration_number: String,
    pub last_date: String,
    pub birth_date: String,
    pub sex: String,
    pub activities: String,
    pub additionally_activities: Vec<String>,
    pub activity_kinds: Vec<ActivityKind>,
    pub registrations: Vec<TaxRegistration>,
    pub registration: RegistrationRecord,
    pub termination: Termination,
    pub termination_cancel: TerminationCancel,
    pub history: Vec<HistoryEntry>,
    pub pdv_code: String,
    pub pdv_status: String,
    pub tax_debts: TaxDebts,
    pub singletax: SingletaxStatus,
    pub singletax_risk: Notice,
    pub address: Address,
    pub tax_departments: TaxDepartment,
    pub tax_requisites: Vec<TaxRequisite>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityKind {
    pub name: String,
    pub code: String,
    pub is_primary: bool,
}

/// Registration with a tax or statistics authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRegistration {
    pub code: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRecord {
    pub date: String,
    pub record_number: String,
    pub record_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Termination {
    pub state: i64,
    pub state_text: String,
    pub date: String,
    pub record_number: String,
    pub cause: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationCancel {
    pub date: String,
    pub record_number: String,
    pub doc_date: String,
    pub court_name: String,
    pub doc_number: String,
    pub date_judge: String,
}

/// All field changes registered on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub date: String,
    pub changes: Vec<FieldChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldChange {
    pub field: String,
    pub old_value: String,
    pub new_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxDebts {
    pub text: String,
    pub icon: String,
    pub total: String,
    pub local: String,
    pub government: String,
    pub database_date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingletaxStatus {
    pub date_start: String,
    pub date_end: String,
    pub rate: String,
    pub group: String,
    pub active: bool,
}

/// Short text with an icon, e.g. a risk warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notice {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub zip: String,
    pub country: String,
    pub address: String,
    pub parts: AddressParts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressParts {
    pub atu: String,
    pub atu_code: String,
    pub street: String,
    pub house_type: String,
    pub house: String,
    pub building: String,
    pub num_type: String,
    pub num: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxDepartment {
    pub tax_department_id: i64,
    #[serde(rename = "C_REG")]
    pub c_reg: i64,
    #[serde(rename = "C_DST")]
    pub c_dst: i64,
    #[serde(rename = "C_RAJ")]
    pub c_raj: i64,
    #[serde(rename = "NAME_RAJ")]
    pub name_raj: String,
    #[serde(rename = "T_STI")]
    pub t_sti: i64,
    #[serde(rename = "NAME_STI")]
    pub name_sti: String,
    #[serde(rename = "C_STI")]
    pub c_sti: i64,
    pub code: i64,
    pub koatuu_code: String,
    pub region_tax_department_code: i64,
}

/// Bank requisites for paying a given tax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRequisite {
    #[serde(rename = "type")]
    pub kind: String,
    pub koatuu_obl: String,
    pub koatuu: String,
    pub location: String,
    pub recipient: String,
    pub code: i64,
    pub bank: String,
    pub mfo: i64,
    pub iban: String,
    pub tax_code: i64,
}

/// One element of `GET /company/{code}`, which returns a bare array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub full_name: String,
    pub short_name: String,
    pub code: String,
    pub ceo_name: String,
    pub location: String,
    pub activities: String,
    pub status: String,
    pub beneficiaries: Vec<Beneficiary>,
    pub database_date: String,
    pub pdv_code: String,
    pub pdv_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Beneficiary {
    pub title: String,
    pub capital: i64,
    pub location: String,
}

/// One element of `GET /changed/{code}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyChanges {
    pub code: String,
    pub items: Vec<HistoryEntry>,
}

/// `GET /wagedebt/{code}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wagedebt {
    pub code: String,
    pub debt: String,
    pub penalties_count: String,
    pub name: String,
    pub database_date: String,
    pub active: i64,
}

/// One element of `GET /audit` and `GET /audit/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audit {
    pub audit_id: String,
    pub code: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub pib: String,
}

/// `GET /registrations`: newly registered companies and FOPs. No envelope.
pub type Registrations = Page<RegistrationSummary>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub full_name: String,
    pub activity: String,
    pub registration_date: String,
    pub region_id: i64,
}

/// `GET /registrations/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registration {
    pub code: String,
    pub full_name: String,
    pub short_name: String,
    pub location: String,
    pub ceo_name: String,
    pub activity: String,
    pub status: String,
    pub email: String,
    pub phones: String,
    pub registration_date: String,
    pub capital: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region_id: i64,
}

/// `GET /inspections`.
pub type Inspections = Envelope<Page<Inspection>>;

/// `GET /inspections/{id}`.
pub type InspectionItem = Envelope<Inspection>;

/// An inspection by a regulatory body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inspection {
    pub id: String,
    pub code: String,
    pub name: String,
    pub address: String,
    pub region: String,
    pub status: String,
    pub risk: String,
    pub last_modify: String,
    pub date_start: String,
    pub date_end: String,
    pub regulator: String,
    pub parent_regulator: String,
    pub activity_type: String,
    pub database_date: String,
    pub violations_count: String,
    pub parts_count: String,
}

/// `GET /pdf/{code}`.
pub type Pdf = Envelope<Link>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub link: String,
}

/// `GET /permits`.
pub type Permits = Envelope<Page<Permit>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permit {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub start_date: String,
    pub end_date: String,
    pub renewal_date: String,
    pub pause_date: String,
    pub cancelation_date: String,
    pub active: i64,
    pub address: String,
    pub registration_date: String,
}

/// `GET /singletax`.
pub type Singletax = Envelope<Page<SingletaxPayer>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingletaxPayer {
    pub fop_hash: String,
    pub name: String,
    pub code: String,
    pub date_start: String,
    pub date_end: String,
    pub rate: String,
    pub group: String,
    pub active: bool,
}

/// `GET /vat`.
pub type Vat = Envelope<VatPayer>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VatPayer {
    pub pdv_code: String,
    pub pdv_status: String,
    pub date_anul: String,
    pub name: String,
    pub code: String,
    pub database_date: String,
}
