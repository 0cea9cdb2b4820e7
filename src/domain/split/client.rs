//! Splits sub-client.

use crate::client::PaystackClient;
use crate::domain::split::wire::{
    CreateSplitRequest, ListSplitsQuery, RemoveSplitSubaccountRequest, SplitShare,
    UpdateSplitRequest,
};
use crate::domain::split::Split;
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for transaction split operations.
pub struct Splits<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Splits<'a> {
    pub async fn create(&self, request: &CreateSplitRequest) -> SdkResult<Split> {
        self.client
            .http
            .post("/split", request, "Failed to create split")
            .await
    }

    pub async fn list(&self, query: &ListSplitsQuery) -> SdkResult<Paginated<Split>> {
        self.client
            .http
            .list("/split", Some(query), "Failed to list splits")
            .await
    }

    pub async fn fetch(&self, id: u64) -> SdkResult<Split> {
        self.client
            .http
            .get(&format!("/split/{}", id), "Failed to fetch split")
            .await
    }

    pub async fn update(&self, id: u64, request: &UpdateSplitRequest) -> SdkResult<Split> {
        self.client
            .http
            .put(&format!("/split/{}", id), request, "Failed to update split")
            .await
    }

    /// Add a subaccount, or update its share if already present.
    pub async fn add_subaccount(&self, id: u64, share: &SplitShare) -> SdkResult<Split> {
        self.client
            .http
            .post(
                &format!("/split/{}/subaccount/add", id),
                share,
                "Failed to add subaccount",
            )
            .await
    }

    pub async fn remove_subaccount(
        &self,
        id: u64,
        request: &RemoveSplitSubaccountRequest,
    ) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::POST,
                &format!("/split/{}/subaccount/remove", id),
                NONE,
                Some(request),
                "Failed to remove subaccount",
            )
            .await
    }
}
