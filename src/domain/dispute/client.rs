//! Disputes sub-client.

use crate::client::PaystackClient;
use crate::domain::dispute::wire::{
    DisputeEvidenceRequest, ListDisputesQuery, ResolveDisputeRequest, UpdateDisputeRequest,
    UploadUrlQuery,
};
use crate::domain::dispute::{Dispute, UploadUrl};
use crate::error::SdkResult;
use crate::http::Paginated;

/// Sub-client for disputes.
pub struct Disputes<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Disputes<'a> {
    pub async fn list(&self, query: &ListDisputesQuery) -> SdkResult<Paginated<Dispute>> {
        self.client
            .http
            .list("/dispute", Some(query), "Failed to list disputes")
            .await
    }

    pub async fn fetch(&self, id: u64) -> SdkResult<Dispute> {
        self.client
            .http
            .get(&format!("/dispute/{}", id), "Failed to fetch dispute")
            .await
    }

    /// Disputes raised on one transaction. Paystack returns a single object.
    pub async fn list_transaction_disputes(&self, transaction_id: u64) -> SdkResult<Dispute> {
        self.client
            .http
            .get(
                &format!("/dispute/transaction/{}", transaction_id),
                "Failed to fetch transaction disputes",
            )
            .await
    }

    pub async fn update(&self, id: u64, request: &UpdateDisputeRequest) -> SdkResult<Dispute> {
        self.client
            .http
            .put(&format!("/dispute/{}", id), request, "Failed to update dispute")
            .await
    }

    pub async fn add_evidence(
        &self,
        id: u64,
        request: &DisputeEvidenceRequest,
    ) -> SdkResult<Dispute> {
        self.client
            .http
            .post(
                &format!("/dispute/{}/evidence", id),
                request,
                "Failed to add dispute evidence",
            )
            .await
    }

    pub async fn upload_url(&self, id: u64, upload_filename: &str) -> SdkResult<UploadUrl> {
        self.client
            .http
            .get_with_query(
                &format!("/dispute/{}/upload_url", id),
                &UploadUrlQuery { upload_filename },
                "Failed to get upload URL",
            )
            .await
    }

    pub async fn resolve(&self, id: u64, request: &ResolveDisputeRequest) -> SdkResult<Dispute> {
        self.client
            .http
            .put(
                &format!("/dispute/{}/resolve", id),
                request,
                "Failed to resolve dispute",
            )
            .await
    }
}
