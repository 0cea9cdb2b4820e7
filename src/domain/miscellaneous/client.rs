//! Miscellaneous sub-client.

use crate::client::PaystackClient;
use crate::domain::miscellaneous::wire::ListBanksQuery;
use crate::domain::miscellaneous::{Bank, Country};
use crate::error::SdkResult;
use crate::http::Paginated;

/// Sub-client for reference data.
pub struct Miscellaneous<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Miscellaneous<'a> {
    pub async fn list_banks(&self, query: &ListBanksQuery) -> SdkResult<Paginated<Bank>> {
        self.client
            .http
            .list("/bank", Some(query), "Failed to list banks")
            .await
    }

    pub async fn list_countries(&self) -> SdkResult<Vec<Country>> {
        self.client
            .http
            .get("/country", "Failed to list countries")
            .await
    }
}
