//! Partner key generation and usage statistics.

use crate::client::OdbClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::types::{GenKey, Statistics};

pub const GEN_KEY: Endpoint<GenKey> = Endpoint::new("/genKey");
pub const STATISTICS: Endpoint<Statistics> = Endpoint::new("/statistics");

impl OdbClient {
    /// Issue an API key for one of a partner's clients.
    ///
    /// `salt` is the partner password and `id` the partner's stable
    /// identifier for the client.
    pub fn gen_key(&self, salt: &str, id: &str) -> Result<GenKey, ApiError> {
        self.fetch(GEN_KEY.request(&[])?.param("salt", salt).param("id", id))
    }

    /// Quota usage of the configured API key.
    pub fn statistics(&self) -> Result<Statistics, ApiError> {
        self.fetch(STATISTICS.request(&[])?)
    }
}
