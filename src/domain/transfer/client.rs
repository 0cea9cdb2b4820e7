//! Transfers sub-client.

use crate::client::PaystackClient;
use crate::domain::transfer::wire::{
    BulkTransferRequest, FinalizeTransferRequest, InitiateTransferRequest, ListTransfersQuery,
};
use crate::domain::transfer::Transfer;
use crate::error::SdkResult;
use crate::http::Paginated;

/// Sub-client for transfers.
pub struct Transfers<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Transfers<'a> {
    /// Starts a transfer. With OTP enabled the result has status `otp` and
    /// must be completed with [`Transfers::finalize`].
    pub async fn initiate(&self, request: &InitiateTransferRequest) -> SdkResult<Transfer> {
        self.client
            .http
            .post("/transfer", request, "Failed to initiate transfer")
            .await
    }

    pub async fn finalize(&self, request: &FinalizeTransferRequest) -> SdkResult<Transfer> {
        self.client
            .http
            .post(
                "/transfer/finalize_transfer",
                request,
                "Failed to finalize transfer",
            )
            .await
    }

    pub async fn bulk(&self, request: &BulkTransferRequest) -> SdkResult<Vec<Transfer>> {
        self.client
            .http
            .post("/transfer/bulk", request, "Failed to initiate bulk transfer")
            .await
    }

    pub async fn list(&self, query: &ListTransfersQuery) -> SdkResult<Paginated<Transfer>> {
        self.client
            .http
            .list("/transfer", Some(query), "Failed to list transfers")
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<Transfer> {
        let path = format!("/transfer/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch transfer")
            .await
    }

    pub async fn verify(&self, reference: &str) -> SdkResult<Transfer> {
        let path = format!("/transfer/verify/{}", urlencoding::encode(reference));
        self.client
            .http
            .get(&path, "Failed to verify transfer")
            .await
    }
}
