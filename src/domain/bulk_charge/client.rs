//! Bulk charges sub-client.

use crate::client::PaystackClient;
use crate::domain::bulk_charge::wire::{BulkChargeItem, BulkChargeItemsQuery};
use crate::domain::bulk_charge::{BulkCharge, BulkChargeBatch};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use crate::shared::Pagination;
use reqwest::Method;

/// Sub-client for bulk charges.
pub struct BulkCharges<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> BulkCharges<'a> {
    /// Queues the charges. Processing happens asynchronously on Paystack's side.
    pub async fn initiate(&self, items: &[BulkChargeItem]) -> SdkResult<BulkChargeBatch> {
        self.client
            .http
            .post("/bulkcharge", items, "Failed to initiate bulk charge")
            .await
    }

    pub async fn list(&self, query: &Pagination) -> SdkResult<Paginated<BulkChargeBatch>> {
        self.client
            .http
            .list("/bulkcharge", Some(query), "Failed to list bulk charges")
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<BulkChargeBatch> {
        let path = format!("/bulkcharge/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch bulk charge batch")
            .await
    }

    pub async fn fetch_charges(
        &self,
        id_or_code: &str,
        query: &BulkChargeItemsQuery,
    ) -> SdkResult<Paginated<BulkCharge>> {
        let path = format!("/bulkcharge/{}/charges", urlencoding::encode(id_or_code));
        self.client
            .http
            .list(&path, Some(query), "Failed to fetch bulk charges")
            .await
    }

    pub async fn pause(&self, batch_code: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/bulkcharge/pause/{}", urlencoding::encode(batch_code));
        self.client
            .http
            .acknowledge(Method::GET, &path, NONE, NONE, "Failed to pause bulk charge")
            .await
    }

    pub async fn resume(&self, batch_code: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/bulkcharge/resume/{}", urlencoding::encode(batch_code));
        self.client
            .http
            .acknowledge(Method::GET, &path, NONE, NONE, "Failed to resume bulk charge")
            .await
    }
}
