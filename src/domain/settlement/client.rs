//! Settlements sub-client.

use crate::client::PaystackClient;
use crate::domain::settlement::wire::ListSettlementsQuery;
use crate::domain::settlement::{Settlement, SettlementTransaction};
use crate::error::SdkResult;
use crate::http::Paginated;
use crate::shared::Pagination;

/// Sub-client for settlements.
pub struct Settlements<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Settlements<'a> {
    pub async fn list(&self, query: &ListSettlementsQuery) -> SdkResult<Paginated<Settlement>> {
        self.client
            .http
            .list("/settlement", Some(query), "Failed to list settlements")
            .await
    }

    /// Transactions paid out in one settlement. `meta.total_volume` carries the
    /// settled sum.
    pub async fn transactions(
        &self,
        id: u64,
        query: &Pagination,
    ) -> SdkResult<Paginated<SettlementTransaction>> {
        self.client
            .http
            .list(
                &format!("/settlement/{}/transactions", id),
                Some(query),
                "Failed to list settlement transactions",
            )
            .await
    }
}
