//! Business monitoring events.

use serde::{Deserialize, Serialize};

use super::{Envelope, Page};

/// `GET /timeline`.
pub type Timeline = Envelope<Page<TimelineEvent>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    pub log_id: String,
    pub id: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: String,
    pub event_date: String,
    pub change: Vec<TimelineChange>,
}

/// What changed in an event. Which fields are filled depends on the event
/// type; the rest stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineChange {
    pub old_value: String,
    pub new_value: String,
    pub number: String,
    pub document_id: String,
    #[serde(rename = "countAddedItems")]
    pub count_added_items: String,
    #[serde(rename = "addedItems")]
    pub added_items: Vec<String>,
    #[serde(rename = "countRemovedItems")]
    pub count_removed_items: String,
    #[serde(rename = "removedItems")]
    pub removed_items: String,
    pub date: String,
    pub name: String,
    pub is_company: String,
    pub judgment_code: String,
    pub source: String,
    pub link: String,
    pub company_name: String,
    pub without_change_logs: String,
    pub declarant_id: String,
    pub year: String,
    pub declaration_id: String,
    pub public_type: String,
    pub subject_type: String,
    pub code_pdv: String,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub termless: String,
    #[serde(rename = "sanctionList")]
    pub sanction_list: String,
    #[serde(rename = "sanctionReason")]
    pub sanction_reason: String,
    pub pib: String,
    pub resident: String,
}
