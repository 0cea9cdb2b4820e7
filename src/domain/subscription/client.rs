//! Subscriptions sub-client.

use crate::client::PaystackClient;
use crate::domain::subscription::wire::{
    CreateSubscriptionRequest, ListSubscriptionsQuery, SubscriptionToggleRequest,
};
use crate::domain::subscription::{ManageLink, Subscription};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for subscription operations.
pub struct Subscriptions<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Subscriptions<'a> {
    pub async fn create(&self, request: &CreateSubscriptionRequest) -> SdkResult<Subscription> {
        self.client
            .http
            .post("/subscription", request, "Failed to create subscription")
            .await
    }

    pub async fn list(
        &self,
        query: &ListSubscriptionsQuery,
    ) -> SdkResult<Paginated<Subscription>> {
        self.client
            .http
            .list("/subscription", Some(query), "Failed to list subscriptions")
            .await
    }

    pub async fn fetch(&self, id_or_code: &str) -> SdkResult<Subscription> {
        let path = format!("/subscription/{}", urlencoding::encode(id_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch subscription")
            .await
    }

    pub async fn enable(&self, request: &SubscriptionToggleRequest) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::POST,
                "/subscription/enable",
                NONE,
                Some(request),
                "Failed to enable subscription",
            )
            .await
    }

    pub async fn disable(&self, request: &SubscriptionToggleRequest) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::POST,
                "/subscription/disable",
                NONE,
                Some(request),
                "Failed to disable subscription",
            )
            .await
    }

    /// Link the customer can use to update their card.
    pub async fn generate_manage_link(&self, code: &str) -> SdkResult<ManageLink> {
        let path = format!("/subscription/{}/manage/link", urlencoding::encode(code));
        self.client
            .http
            .get(&path, "Failed to generate subscription management link")
            .await
    }

    pub async fn send_manage_email(&self, code: &str) -> SdkResult<Acknowledgement> {
        let path = format!("/subscription/{}/manage/email", urlencoding::encode(code));
        self.client
            .http
            .acknowledge(
                Method::POST,
                &path,
                NONE,
                NONE,
                "Failed to send subscription management email",
            )
            .await
    }
}
