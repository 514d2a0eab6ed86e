//! Register of real property rights.
//!
//! Extracts are asynchronous: `realty_item` or `realty_report` order one and
//! return a `resultId`, which `realty_result` polls.

use serde::Serialize;

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{Realty, RealtyRequest, RealtyResult};

pub const REALTY: Endpoint<Realty> = Endpoint::new("/realty");
pub const REALTY_ITEM: Endpoint<RealtyRequest> = Endpoint::new("/realty/{}/{}");
pub const REALTY_RESULT: Endpoint<RealtyResult> = Endpoint::new("/realty-result");
pub const REALTY_REPORT: Endpoint<RealtyRequest> = Endpoint::new("/realty-report/{}");

/// Filters for `realty`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RealtyParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// Seconds to wait for the register to answer.
    pub timeout: Option<u32>,
    /// Role of the subject, e.g. 11 owner or 9 debtor.
    pub role: Option<u32>,
}

impl OdbClient {
    /// Property of a company or person by EDRPOU code or tax number.
    pub fn realty(&self, code: &str, params: &RealtyParams) -> Result<Realty, ApiError> {
        self.fetch(REALTY.request(&[])?.params(params)?.lookup("code", code)?)
    }

    /// Order a detailed extract for object `id` of the group `report_result_id`.
    pub fn realty_item(&self, report_result_id: &str, id: &str) -> Result<RealtyRequest, ApiError> {
        self.fetch(REALTY_ITEM.request(&[report_result_id, id])?)
    }

    /// Fetch an ordered extract by the `resultId` from `realty_item` or `realty_report`.
    pub fn realty_result(&self, result_id: &str) -> Result<RealtyResult, ApiError> {
        self.fetch(REALTY_RESULT.request(&[])?.lookup("resultId", result_id)?)
    }

    /// Order an extract by cadastral number (`XXXXXXXXXX:XX:XXX:XXXX`) or
    /// registration number.
    pub fn realty_report(&self, number: &str) -> Result<RealtyRequest, ApiError> {
        self.fetch(REALTY_REPORT.request(&[number])?)
    }
}
