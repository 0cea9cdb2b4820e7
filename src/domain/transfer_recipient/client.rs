//! Transfer recipients sub-client.

use crate::client::PaystackClient;
use crate::domain::transfer_recipient::wire::{
    BulkCreateTransferRecipientRequest, CreateTransferRecipientRequest,
    UpdateTransferRecipientRequest,
};
use crate::domain::transfer_recipient::{BulkRecipients, TransferRecipient};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use crate::shared::Pagination;
use reqwest::Method;

/// Sub-client for transfer recipients.
pub struct TransferRecipients<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> TransferRecipients<'a> {
    pub async fn create(
        &self,
        request: &CreateTransferRecipientRequest,
    ) -> SdkResult<TransferRecipient> {
        self.client
            .http
            .post(
                "/transferrecipient",
                request,
                "Failed to create transfer recipient",
            )
            .await
    }

    pub async fn bulk_create(
        &self,
        request: &BulkCreateTransferRecipientRequest,
    ) -> SdkResult<BulkRecipients> {
        self.client
            .http
            .post(
                "/transferrecipient/bulk",
                request,
                "Failed to create transfer recipients",
            )
            .await
    }

    pub async fn list(&self, query: &Pagination) -> SdkResult<Paginated<TransferRecipient>> {
        self.client
            .http
            .list(
                "/transferrecipient",
                Some(query),
                "Failed to list transfer recipients",
            )
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<TransferRecipient> {
        let path = format!("/transferrecipient/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch transfer recipient")
            .await
    }

    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdateTransferRecipientRequest,
    ) -> SdkResult<TransferRecipient> {
        let path = format!("/transferrecipient/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .put(&path, request, "Failed to update transfer recipient")
            .await
    }

    /// Soft-deletes the recipient; it stops appearing in listings.
    pub async fn delete(&self, id_or_code: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/transferrecipient/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .acknowledge(
                Method::DELETE,
                &path,
                NONE,
                NONE,
                "Failed to delete transfer recipient",
            )
            .await
    }
}
