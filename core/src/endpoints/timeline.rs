//! Business monitoring events.

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::Timeline;

pub const TIMELINE: Endpoint<Timeline> = Endpoint::new("/timeline");

/// Filters for `timeline`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimelineParams {
    /// EDRPOU code.
    pub code: Option<String>,
    /// Return events after this `log_id`.
    pub from_id: Option<String>,
    /// Event type, e.g. `new_penalty_borrower`, `realty`, `legal` or
    /// `person_sanction`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Only for `person_sanction`.
    pub pib: Option<String>,
    /// Only for `person_sanction`.
    pub itn: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub created_date: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// `asc` or `desc`.
    pub order: Option<String>,
    /// `id`, `created_at` or `event_date`.
    pub order_field: Option<String>,
}

impl OdbClient {
    /// Change events of the companies on the monitoring list.
    pub fn timeline(&self, params: &TimelineParams) -> Result<Timeline, ApiError> {
        self.fetch(TIMELINE.request(&[])?.params(params)?)
    }
}
