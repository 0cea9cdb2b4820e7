//! Subscription domain: customers enrolled on plans.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{CreateSubscriptionRequest, ListSubscriptionsQuery, SubscriptionToggleRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionStatus {
    Active,
    NonRenewing,
    Attention,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A subscription.
///
/// `customer` and `plan` are bare ids on list responses and full objects on
/// fetch, so they stay as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u64,
    pub subscription_code: String,
    #[serde(default)]
    pub status: Option<SubscriptionStatus>,
    #[serde(default)]
    pub email_token: Option<String>,
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub customer: Option<serde_json::Value>,
    #[serde(default)]
    pub plan: Option<serde_json::Value>,
    #[serde(default)]
    pub authorization: Option<serde_json::Value>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub cron_expression: Option<String>,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub open_invoice: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageLink {
    pub link: String,
}
