//! Verification sub-client.

use crate::client::PaystackClient;
use crate::domain::verification::wire::{ResolveAccountQuery, ValidateAccountRequest};
use crate::domain::verification::{AccountValidation, CardBin, ResolvedAccount};
use crate::error::SdkResult;

/// Sub-client for account and card verification.
pub struct Verification<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Verification<'a> {
    /// Looks up the account name behind an account number.
    pub async fn resolve_account(&self, query: &ResolveAccountQuery) -> SdkResult<ResolvedAccount> {
        self.client
            .http
            .get_with_query("/bank/resolve", query, "Failed to resolve account")
            .await
    }

    pub async fn validate_account(
        &self,
        request: &ValidateAccountRequest,
    ) -> SdkResult<AccountValidation> {
        self.client
            .http
            .post("/bank/validate", request, "Failed to validate account")
            .await
    }

    pub async fn resolve_card_bin(&self, bin: &str) -> SdkResult<CardBin> {
        let path = format!("/decision/bin/{}", urlencoding::encode(bin));
        self.client
            .http
            .get(&path, "Failed to resolve card BIN")
            .await
    }
}
