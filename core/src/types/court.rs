//! Court register: decisions, hearings, cases.

use serde::{Deserialize, Serialize};

use super::{Envelope, Page, Party};

/// `GET /court`: search over court decisions. Status and list share one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtDecisions {
    pub status: String,
    #[serde(deserialize_with = "super::count")]
    pub count: u64,
    pub items: Vec<CourtDecision>,
}

/// A court decision as listed by `GET /court`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtDecision {
    pub doc_id: i64,
    pub court_code: i64,
    pub court_name: String,
    pub judgment_code: i64,
    pub judgment_name: String,
    pub justice_code: i64,
    pub justice_name: String,
    pub category_code: i64,
    pub category_name: String,
    pub cause_number: String,
    pub adjudication_date: String,
    pub date_publ: String,
    pub receipt_date: String,
    pub judge: String,
    pub link: String,
}

/// `GET /court/{id}`: one decision with its full text. No envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtDocument {
    pub doc_id: i64,
    pub court_code: i64,
    pub court_name: String,
    pub judgment_code: i64,
    pub judgment_name: String,
    pub justice_code: i64,
    pub justice_name: String,
    pub category_code: i64,
    pub category_name: String,
    pub cause_number: String,
    pub adjudication_date: String,
    pub date_publ: String,
    pub receipt_date: String,
    pub judge: String,
    pub document_link: String,
    pub text: String,
}

/// `GET /institutions`.
pub type Institutions = Envelope<Page<Institution>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Institution {
    pub name: String,
    pub court_id: String,
    pub code: String,
    pub region_id: String,
    pub stage: String,
    pub type_id: String,
}

/// `GET /schedule`.
pub type Schedule = Envelope<Page<Hearing>>;

/// `GET /schedule/{id}`.
pub type ScheduleItem = Envelope<Hearing>;

/// A scheduled court hearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hearing {
    pub hearing_id: String,
    pub judge: String,
    pub forma: String,
    pub number: String,
    pub court_id: String,
    pub involved: String,
    pub description: String,
    pub date: String,
    pub judgment_code: String,
    pub code: String,
    pub accused: Vec<String>,
}

/// `GET /accused`.
pub type Accused = Envelope<Page<AccusedCase>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccusedCase {
    pub forma: String,
    pub number: String,
    pub court_id: String,
    pub description: String,
    pub judgment_code: String,
    pub accused: Vec<String>,
}

/// `GET /company-courts`: case counters per kind of proceedings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyCourts {
    pub civil: CaseCounter,
    pub criminal: CaseCounter,
    pub arbitrage: CaseCounter,
    pub administrative: CaseCounter,
    pub admin_offense: CaseCounter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseCounter {
    pub count: String,
    pub live_count: String,
}

/// `GET /company-courts/{type}`: a court case a company takes part in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyCourtCase {
    pub number: String,
    pub date: String,
    pub date_start: String,
    pub last_schedule_date: String,
    pub live: String,
    pub description: String,
    pub schedule_count: String,
    pub cost: String,
    pub amount: String,
    pub court_name: String,
    pub plaintiffs: Vec<Party>,
    pub defendants: Vec<Party>,
    pub third_persons: Vec<Party>,
    pub appeals: Vec<Party>,
    pub cassations: Vec<Party>,
    pub judgment_code: String,
    pub last_document_date: String,
    pub stages: Stages<StageSummary>,
}

/// Per-instance details of a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stages<S> {
    pub first: S,
    pub appeal: S,
    pub cassation: S,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSummary {
    pub court_code: i64,
    pub court_name: String,
    pub judge: String,
    pub consideration_for_side: String,
    pub description: String,
}

/// `GET /court-cases/{number}`: a case with decisions per instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtCase {
    pub number: String,
    pub date: String,
    pub date_start: String,
    pub last_schedule_date: String,
    pub last_status: String,
    pub live: String,
    pub description: String,
    pub schedule_count: String,
    pub cost: String,
    pub amount: String,
    pub court_name: String,
    pub plaintiffs: Vec<Party>,
    pub defendants: Vec<Party>,
    pub third_persons: Vec<Party>,
    pub appeals: Vec<Party>,
    pub cassations: Vec<Party>,
    pub judgment_code: String,
    pub last_document_date: String,
    pub stages: Stages<CaseStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStage {
    pub court_code: i64,
    pub court_name: String,
    pub judge: String,
    pub consideration: String,
    pub description: String,
    pub decisions: Vec<StageDecision>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageDecision {
    pub court_code: i64,
    pub court_name: String,
    pub judgment_code: i64,
    pub judgment_name: String,
    pub justice_code: i64,
    pub justice_name: String,
    pub adjudication_date: String,
    pub date_publ: String,
    pub receipt_date: String,
    pub judge: String,
    pub result: String,
    pub link: String,
}
