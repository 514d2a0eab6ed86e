//! Registers about natural persons.

use serde::{Deserialize, Serialize};

use super::{Envelope, Page};

/// `GET /aliment`: alimony debtors. No envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aliments {
    #[serde(deserialize_with = "super::count")]
    pub count: u64,
    pub aliments: Vec<AlimentDebtor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlimentDebtor {
    pub full_name: String,
    pub birth_date: String,
    pub active: i64,
}

/// `GET /lawyers`.
pub type Lawyers = Envelope<Page<LawyerSummary>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawyerSummary {
    pub id: i64,
    pub full_name: String,
    pub racalc: String,
    pub certnum: String,
    pub certat: String,
    pub certcalc: String,
    pub database_date: String,
}

/// `GET /lawyers/{id}`.
pub type LawyerItem = Envelope<Lawyer>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lawyer {
    pub id: i64,
    pub full_name: String,
    pub racalc: String,
    pub certnum: String,
    pub certat: String,
    pub certcalc: String,
    pub database_date: String,
    pub phone: String,
    pub email: String,
    pub decision_date: String,
    pub decision_number: String,
    pub activities: String,
    pub experience: String,
    pub termination: String,
}

/// `GET /corrupt-officials`.
pub type CorruptOfficials = Envelope<Page<CorruptOfficial>>;

/// `GET /corrupt-officials/{id}`.
pub type CorruptOfficialItem = Envelope<CorruptOfficial>;

/// A person found guilty of a corruption offence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptOfficial {
    pub id: String,
    pub full_name: String,
    pub decision_date: String,
    pub decision_number: String,
    pub work_place: String,
    pub position: String,
    pub codex_articles: Vec<String>,
    pub active: i64,
}

/// `GET /passport`: lost or stolen passports. No envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passports {
    #[serde(deserialize_with = "super::count")]
    pub count: u64,
    pub data: Vec<LostPassport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LostPassport {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ovd: String,
    pub theft_date: String,
    pub date: String,
}

/// `GET /wanted`.
pub type Wanted = Envelope<Page<WantedPerson>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WantedPerson {
    pub id: String,
    pub full_name: String,
    pub birth_date: String,
    pub lost_date: String,
    pub sex: String,
    pub article_crim: String,
    pub lost_place: String,
    pub ovd: String,
    pub category: String,
    pub restraint: String,
    pub status_text: String,
    pub status: String,
}
