//! Plan domain: recurring billing plans.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{CreatePlanRequest, ListPlansQuery, UpdatePlanRequest};

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u64,
    pub name: String,
    pub plan_code: String,
    /// Amount in subunits.
    pub amount: u64,
    pub interval: Interval,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub send_invoices: Option<bool>,
    #[serde(default)]
    pub send_sms: Option<bool>,
    #[serde(default)]
    pub hosted_page: Option<bool>,
    #[serde(default)]
    pub hosted_page_url: Option<String>,
    #[serde(default)]
    pub hosted_page_summary: Option<String>,
    #[serde(default)]
    pub invoice_limit: Option<u32>,
    #[serde(default)]
    pub subscriptions: Vec<serde_json::Value>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
