//! Enforcement proceedings and the debtors register.

use serde::{Deserialize, Serialize};

use super::{Envelope, Page};

/// `GET /full-penalty` and `GET /full-penalty/{number}`.
pub type FullPenalties = Envelope<FullPenaltyPage>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullPenaltyPage {
    #[serde(deserialize_with = "super::count")]
    pub count: u64,
    #[serde(deserialize_with = "super::count")]
    pub active_count: u64,
    pub items: Vec<Proceeding>,
}

/// An enforcement proceeding from the ASVP register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proceeding {
    pub number: String,
    pub borrower_code: String,
    pub sub_type: String,
    pub borrower_last_name: String,
    pub borrower_first_name: String,
    pub borrower_middle_name: String,
    pub borrower_birth_date: String,
    pub creditor_name: String,
    pub creditor_code: String,
    pub creditor_sub_type: String,
    pub asvp_gis_name: String,
    pub asvp_dep_id: String,
    pub begin_date: String,
    pub asvp_status: String,
    pub active: String,
}

/// `GET /full-penalty-doc/{number}`: a proceeding with its documents.
pub type FullPenaltyDoc = Envelope<ProceedingDetails>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProceedingDetails {
    #[serde(flatten)]
    pub proceeding: Proceeding,
    pub state: String,
    pub executor_name: String,
    pub publisher: String,
    pub publisher_info: String,
    pub executor_adress: String,
    pub documents: Vec<ProceedingDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProceedingDocument {
    pub id: String,
    pub name: String,
    pub print_date: String,
    pub accept_date: String,
    pub cancel_date: String,
    pub link: String,
}

/// `GET /performer`: state and private enforcement officers.
pub type Performers = Envelope<Page<Performer>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performer {
    #[serde(rename = "regionId")]
    pub region_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub contacts: String,
    pub managers: String,
}

/// `GET /penalties/{code}`.
pub type Penalties = Envelope<Page<Penalty>>;

/// `GET /penalty/{number}`.
pub type PenaltyItem = Envelope<Penalty>;

/// An entry of the unified debtors register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalty {
    pub code: String,
    pub court_name: String,
    pub gis_name: String,
    pub number: String,
    pub category: String,
    pub id: String,
    pub name: String,
    pub address_atu_str: String,
    pub address: String,
    pub department_phone: String,
    pub executor: String,
    pub executor_phone: String,
    pub executor_email: String,
    pub deduction_type: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: String,
    pub birth_place_atu_str: String,
    pub birth_place: String,
    pub link: String,
}

/// `GET /penalties`: debtors found by full name and birth date.
pub type PenaltiesByName = Envelope<Page<DebtorPenalty>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtorPenalty {
    pub court_name: String,
    pub gis_name: String,
    pub number: String,
    pub category: String,
    pub id: String,
    pub department_phone: String,
    pub executor: String,
    pub executor_phone: String,
    pub executor_email: String,
    pub deduction_type: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: String,
}
