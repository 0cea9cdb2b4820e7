//! Plans sub-client.

use crate::client::PaystackClient;
use crate::domain::plan::wire::{CreatePlanRequest, ListPlansQuery, UpdatePlanRequest};
use crate::domain::plan::Plan;
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for subscription plans.
pub struct Plans<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Plans<'a> {
    pub async fn create(&self, request: &CreatePlanRequest) -> SdkResult<Plan> {
        self.client
            .http
            .post("/plan", request, "Failed to create plan")
            .await
    }

    pub async fn list(&self, query: &ListPlansQuery) -> SdkResult<Paginated<Plan>> {
        self.client
            .http
            .list("/plan", Some(query), "Failed to list plans")
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<Plan> {
        let path = format!("/plan/{}", urlencoding::encode(id_or_code));
        self.client.http.get(&path, "Failed to fetch plan").await
    }

    /// Paystack confirms with a message such as "Plan updated. 1
    /// subscription(s) affected" and no `data`.
    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdatePlanRequest,
    ) -> SdkResult<Acknowledgement> {
        let path = format!("/plan/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .acknowledge(
                Method::PUT,
                &path,
                NONE,
                Some(request),
                "Failed to update plan",
            )
            .await
    }
}
