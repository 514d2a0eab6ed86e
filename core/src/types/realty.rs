//! Register of real property rights.

use serde::{Deserialize, Serialize};

use super::Envelope;

/// `GET /realty`: address groups of a subject's property.
pub type Realty = Envelope<RealtyGroups>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtyGroups {
    #[serde(deserialize_with = "super::count")]
    pub count: u64,
    #[serde(rename = "reportResultId")]
    pub report_result_id: String,
    pub items: Vec<RealtyGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtyGroup {
    #[serde(rename = "dcGroupType")]
    pub dc_group_type: String,
    pub name: String,
    pub id: String,
    pub link: String,
}

/// `GET /realty/{reportResultId}/{id}` and `GET /realty-report/{number}`:
/// a pending extract request.
pub type RealtyRequest = Envelope<RealtyRequestRef>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtyRequestRef {
    #[serde(rename = "resultId")]
    pub result_id: String,
    pub object_result_link: String,
}

/// `GET /realty-result`: the extract once it is ready.
pub type RealtyResult = Envelope<RealtyExtract>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtyExtract {
    pub data: RealtyExtractData,
    pub status: String,
    pub pdf_link: String,
    pub fixed: String,
}

/// Raw register payloads, passed through as the JSON-encoded strings the
/// service returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtyExtractData {
    pub realty: String,
    #[serde(rename = "oldMortgageJson")]
    pub old_mortgage_json: String,
    #[serde(rename = "oldLimitationJson")]
    pub old_limitation_json: String,
    #[serde(rename = "oldRealty")]
    pub old_realty: String,
    #[serde(rename = "allAdresses")]
    pub all_adresses: String,
}
