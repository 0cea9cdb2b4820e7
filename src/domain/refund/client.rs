//! Refunds sub-client.

use crate::client::PaystackClient;
use crate::domain::refund::wire::{CreateRefundRequest, ListRefundsQuery};
use crate::domain::refund::Refund;
use crate::error::SdkResult;
use crate::http::Paginated;

/// Sub-client for refunds.
pub struct Refunds<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Refunds<'a> {
    pub async fn create(&self, request: &CreateRefundRequest) -> SdkResult<Refund> {
        self.client
            .http
            .post("/refund", request, "Failed to create refund")
            .await
    }

    pub async fn list(&self, query: &ListRefundsQuery) -> SdkResult<Paginated<Refund>> {
        self.client
            .http
            .list("/refund", Some(query), "Failed to list refunds")
            .await
    }

    pub async fn fetch(&self, id: u64) -> SdkResult<Refund> {
        self.client
            .http
            .get(&format!("/refund/{}", id), "Failed to fetch refund")
            .await
    }
}
