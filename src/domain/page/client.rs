//! Payment pages sub-client.

use crate::client::PaystackClient;
use crate::domain::page::wire::{AddProductsRequest, CreatePageRequest, UpdatePageRequest};
use crate::domain::page::PaymentPage;
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use crate::shared::Pagination;
use reqwest::Method;

/// Sub-client for payment page operations.
pub struct PaymentPages<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> PaymentPages<'a> {
    pub async fn create(&self, request: &CreatePageRequest) -> SdkResult<PaymentPage> {
        self.client
            .http
            .post("/page", request, "Failed to create payment page")
            .await
    }

    pub async fn list(&self, query: &Pagination) -> SdkResult<Paginated<PaymentPage>> {
        self.client
            .http
            .list("/page", Some(query), "Failed to list payment pages")
            .await
    }

    pub async fn fetch(&self, id_or_slug: &str) -> SdkResult<PaymentPage> {
        let path = format!("/page/{}", urlencoding::encode(id_or_slug));
        self.client
            .http
            .get(&path, "Failed to fetch payment page")
            .await
    }

    pub async fn update(
        &self,
        id_or_slug: &str,
        request: &UpdatePageRequest,
    ) -> SdkResult<PaymentPage> {
        let path = format!("/page/{}", urlencoding::encode(id_or_slug));
        self.client
            .http
            .put(&path, request, "Failed to update payment page")
            .await
    }

    /// Succeeds only when the slug is free.
    pub async fn check_slug_availability(&self, slug: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/page/check_slug_availability/{}", urlencoding::encode(slug));
        self.client
            .http
            .acknowledge(
                Method::GET,
                &path,
                NONE,
                NONE,
                "Failed to check slug availability",
            )
            .await
    }

    pub async fn add_products(
        &self,
        id: u64,
        request: &AddProductsRequest,
    ) -> SdkResult<PaymentPage> {
        self.client
            .http
            .post(
                &format!("/page/{}/product", id),
                request,
                "Failed to add products to payment page",
            )
            .await
    }
}
