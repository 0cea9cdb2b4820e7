//! Payment requests sub-client.

use crate::client::PaystackClient;
use crate::domain::payment_request::wire::{
    CreatePaymentRequestRequest, FinalizePaymentRequestRequest, ListPaymentRequestsQuery,
    UpdatePaymentRequestRequest,
};
use crate::domain::payment_request::{PaymentRequest, PaymentRequestTotals};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for payment requests (invoices).
pub struct PaymentRequests<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> PaymentRequests<'a> {
    pub async fn create(&self, request: &CreatePaymentRequestRequest) -> SdkResult<PaymentRequest> {
        self.client
            .http
            .post("/paymentrequest", request, "Failed to create payment request")
            .await
    }

    pub async fn list(
        &self,
        query: &ListPaymentRequestsQuery,
    ) -> SdkResult<Paginated<PaymentRequest>> {
        self.client
            .http
            .list("/paymentrequest", Some(query), "Failed to list payment requests")
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<PaymentRequest> {
        let path = format!("/paymentrequest/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch payment request")
            .await
    }

    pub async fn verify(&self, code: &str) -> SdkResult<PaymentRequest> {
        let path = format!("/paymentrequest/verify/{}", urlencoding::encode(code));
        self.client
            .http
            .get(&path, "Failed to verify payment request")
            .await
    }

    /// Re-sends the request to the customer by email.
    pub async fn send_notification(&self, code: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/paymentrequest/notify/{}", urlencoding::encode(code));
        self.client
            .http
            .acknowledge(Method::POST, &path, NONE, NONE, "Failed to send notification")
            .await
    }

    pub async fn totals(&self) -> SdkResult<PaymentRequestTotals> {
        self.client
            .http
            .get("/paymentrequest/totals", "Failed to fetch payment request totals")
            .await
    }

    /// Publishes a draft.
    pub async fn finalize(&self, code: &str, send_notification: bool) -> SdkResult<PaymentRequest> {
        let path = format!("/paymentrequest/finalize/{}", urlencoding::encode(code));
        self.client
            .http
            .post(
                &path,
                &FinalizePaymentRequestRequest { send_notification },
                "Failed to finalize payment request",
            )
            .await
    }

    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdatePaymentRequestRequest,
    ) -> SdkResult<PaymentRequest> {
        let path = format!("/paymentrequest/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .put(&path, request, "Failed to update payment request")
            .await
    }

    pub async fn archive(&self, code: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/paymentrequest/archive/{}", urlencoding::encode(code));
        self.client
            .http
            .acknowledge(Method::POST, &path, NONE, NONE, "Failed to archive payment request")
            .await
    }
}
