//! Subaccounts sub-client.

use crate::client::PaystackClient;
use crate::domain::subaccount::wire::{
    CreateSubaccountRequest, ListSubaccountsQuery, UpdateSubaccountRequest,
};
use crate::domain::subaccount::Subaccount;
use crate::error::SdkResult;
use crate::http::Paginated;

/// Sub-client for subaccount operations.
pub struct Subaccounts<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Subaccounts<'a> {
    pub async fn create(&self, request: &CreateSubaccountRequest) -> SdkResult<Subaccount> {
        self.client
            .http
            .post("/subaccount", request, "Failed to create subaccount")
            .await
    }

    pub async fn list(&self, query: &ListSubaccountsQuery) -> SdkResult<Paginated<Subaccount>> {
        self.client
            .http
            .list("/subaccount", Some(query), "Failed to list subaccounts")
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<Subaccount> {
        let path = format!("/subaccount/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch subaccount")
            .await
    }

    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdateSubaccountRequest,
    ) -> SdkResult<Subaccount> {
        let path = format!("/subaccount/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .put(&path, request, "Failed to update subaccount")
            .await
    }
}
