//! Request bodies and query strings for subscription endpoints.

use crate::shared::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Customer email or code.
    pub customer: String,
    /// Plan code.
    pub plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// ISO-8601 first debit date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Body for enabling or disabling a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionToggleRequest {
    /// Subscription code.
    pub code: String,
    /// The subscription's `email_token`.
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSubscriptionsQuery {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Customer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
    /// Plan id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<u64>,
}

impl From<Pagination> for ListSubscriptionsQuery {
    fn from(p: Pagination) -> Self {
        Self {
            per_page: p.per_page,
            page: p.page,
            ..Self::default()
        }
    }
}
