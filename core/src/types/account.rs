//! API account: partner key generation and usage statistics.

use serde::{Deserialize, Serialize};

use super::Envelope;

/// `GET /genKey`.
pub type GenKey = Envelope<GeneratedKey>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedKey {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub settings_token: String,
}

/// Usage of one request category in the current billing period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    pub name: String,
    pub used: i64,
    pub limit: i64,
    pub balance: i64,
}

/// `GET /statistics`: quota usage per request category. No envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    #[serde(rename = "COMPANY")]
    pub company: Quota,
    #[serde(rename = "FULLCOMPANY")]
    pub full_company: Quota,
    #[serde(rename = "FOP")]
    pub fop: Quota,
    #[serde(rename = "FOPINN")]
    pub fop_inn: Quota,
    #[serde(rename = "PERSON")]
    pub person: Quota,
    #[serde(rename = "REGISTRATIONS")]
    pub registrations: Quota,
    #[serde(rename = "VAT")]
    pub vat: Quota,
    #[serde(rename = "SCHEDULE")]
    pub schedule: Quota,
    #[serde(rename = "COMPANYRECORD")]
    pub company_record: Quota,
    #[serde(rename = "COURT")]
    pub court: Quota,
    #[serde(rename = "SUBSCRIPTION")]
    pub subscription: Quota,
    #[serde(rename = "UNSUBSCRIPTION")]
    pub unsubscription: Quota,
    #[serde(rename = "HISTORY")]
    pub history: Quota,
    #[serde(rename = "CHANGES")]
    pub changes: Quota,
    #[serde(rename = "INSTITUTIONS")]
    pub institutions: Quota,
    #[serde(rename = "SEARCH")]
    pub search: Quota,
    #[serde(rename = "LISTS")]
    pub lists: Quota,
    #[serde(rename = "DEBT")]
    pub debt: Quota,
    #[serde(rename = "APICOURT")]
    pub api_court: Quota,
    #[serde(rename = "MESSAGE")]
    pub message: Quota,
    #[serde(rename = "STATISTICS")]
    pub statistics: Quota,
    pub expiry_date: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub webhook: String,
}
