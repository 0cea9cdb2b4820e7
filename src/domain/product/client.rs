//! Products sub-client.

use crate::client::PaystackClient;
use crate::domain::product::wire::{CreateProductRequest, UpdateProductRequest};
use crate::domain::product::Product;
use crate::error::SdkResult;
use crate::http::Paginated;
use crate::shared::Pagination;

/// Sub-client for product operations.
pub struct Products<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Products<'a> {
    pub async fn create(&self, request: &CreateProductRequest) -> SdkResult<Product> {
        self.client
            .http
            .post("/product", request, "Failed to create product")
            .await
    }

    pub async fn list(&self, query: &Pagination) -> SdkResult<Paginated<Product>> {
        self.client
            .http
            .list("/product", Some(query), "Failed to list products")
            .await
    }

    pub async fn fetch(&self, id: u64) -> SdkResult<Product> {
        self.client
            .http
            .get(&format!("/product/{}", id), "Failed to fetch product")
            .await
    }

    pub async fn update(&self, id: u64, request: &UpdateProductRequest) -> SdkResult<Product> {
        self.client
            .http
            .put(
                &format!("/product/{}", id),
                request,
                "Failed to update product",
            )
            .await
    }
}
