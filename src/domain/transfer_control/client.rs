//! Transfer control sub-client.

use crate::client::PaystackClient;
use crate::domain::transfer_control::wire::{FinalizeDisableOtpRequest, ResendOtpRequest};
use crate::domain::transfer_control::{Balance, BalanceLedgerEntry};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use crate::shared::Pagination;
use reqwest::Method;

/// Sub-client for balance and OTP settings.
pub struct TransferControl<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> TransferControl<'a> {
    pub async fn fetch_balance(&self) -> SdkResult<Vec<Balance>> {
        self.client
            .http
            .get("/balance", "Failed to fetch balance")
            .await
    }

    pub async fn fetch_balance_ledger(
        &self,
        query: &Pagination,
    ) -> SdkResult<Paginated<BalanceLedgerEntry>> {
        self.client
            .http
            .list("/balance/ledger", Some(query), "Failed to fetch balance ledger")
            .await
    }

    pub async fn resend_otp(&self, request: &ResendOtpRequest) -> SdkResult<Acknowledgement> {
        self.post_ack("/transfer/resend_otp", Some(request), "Failed to resend OTP")
            .await
    }

    /// Requests an OTP to the business phone; confirm with
    /// [`TransferControl::finalize_disable_otp`].
    pub async fn disable_otp(&self) -> SdkResult<Acknowledgement> {
        self.post_ack("/transfer/disable_otp", NONE, "Failed to disable OTP")
            .await
    }

    pub async fn finalize_disable_otp(
        &self,
        request: &FinalizeDisableOtpRequest,
    ) -> SdkResult<Acknowledgement> {
        self.post_ack(
            "/transfer/disable_otp_finalize",
            Some(request),
            "Failed to finalize disabling OTP",
        )
        .await
    }

    pub async fn enable_otp(&self) -> SdkResult<Acknowledgement> {
        self.post_ack("/transfer/enable_otp", NONE, "Failed to enable OTP")
            .await
    }

    async fn post_ack<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(Method::POST, path, NONE, body, fallback)
            .await
    }
}
