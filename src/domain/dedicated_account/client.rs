//! Dedicated virtual accounts sub-client.

use crate::client::PaystackClient;
use crate::domain::dedicated_account::wire::{
    AssignDedicatedAccountRequest, CreateDedicatedAccountRequest, ListDedicatedAccountsQuery,
    RemoveSplitRequest, RequeryDedicatedAccountQuery, SplitDedicatedAccountRequest,
};
use crate::domain::dedicated_account::{DedicatedAccount, Provider};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for dedicated virtual accounts.
pub struct DedicatedAccounts<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> DedicatedAccounts<'a> {
    pub async fn create(
        &self,
        request: &CreateDedicatedAccountRequest,
    ) -> SdkResult<DedicatedAccount> {
        self.client
            .http
            .post(
                "/dedicated_account",
                request,
                "Failed to create dedicated account",
            )
            .await
    }

    /// Provisioning finishes asynchronously; watch for the
    /// `dedicatedaccount.assign.success` webhook.
    pub async fn assign(
        &self,
        request: &AssignDedicatedAccountRequest,
    ) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::POST,
                "/dedicated_account/assign",
                NONE,
                Some(request),
                "Failed to assign dedicated account",
            )
            .await
    }

    pub async fn list(
        &self,
        query: &ListDedicatedAccountsQuery,
    ) -> SdkResult<Paginated<DedicatedAccount>> {
        self.client
            .http
            .list(
                "/dedicated_account",
                Some(query),
                "Failed to list dedicated accounts",
            )
            .await
    }

    pub async fn fetch(&self, id: u64) -> SdkResult<DedicatedAccount> {
        self.client
            .http
            .get(
                &format!("/dedicated_account/{}", id),
                "Failed to fetch dedicated account",
            )
            .await
    }

    /// Ask Paystack to re-check the account for transfers it may have missed.
    pub async fn requery(
        &self,
        query: &RequeryDedicatedAccountQuery,
    ) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::GET,
                "/dedicated_account/requery",
                Some(query),
                NONE,
                "Failed to requery dedicated account",
            )
            .await
    }

    pub async fn deactivate(&self, id: u64) -> SdkResult<DedicatedAccount> {
        self.client
            .http
            .delete(
                &format!("/dedicated_account/{}", id),
                NONE,
                "Failed to deactivate dedicated account",
            )
            .await
    }

    pub async fn split(
        &self,
        request: &SplitDedicatedAccountRequest,
    ) -> SdkResult<DedicatedAccount> {
        self.client
            .http
            .post(
                "/dedicated_account/split",
                request,
                "Failed to split dedicated account",
            )
            .await
    }

    pub async fn remove_split(&self, request: &RemoveSplitRequest) -> SdkResult<DedicatedAccount> {
        self.client
            .http
            .delete(
                "/dedicated_account/split",
                Some(request),
                "Failed to remove dedicated account split",
            )
            .await
    }

    pub async fn fetch_providers(&self) -> SdkResult<Vec<Provider>> {
        self.client
            .http
            .get(
                "/dedicated_account/available_providers",
                "Failed to fetch dedicated account providers",
            )
            .await
    }
}
