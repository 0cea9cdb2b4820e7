//! Refund domain.

pub mod client;
pub mod wire;

use crate::shared::serde_util::opt_u64_lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{CreateRefundRequest, ListRefundsQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Pending,
    Processing,
    Processed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A refund. `amount` is in subunits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: u64,
    pub amount: u64,
    pub status: RefundStatus,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    /// Transaction id, or the expanded transaction on create.
    #[serde(default)]
    pub transaction: Option<serde_json::Value>,
    #[serde(default)]
    pub dispute: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "opt_u64_lenient::deserialize")]
    pub deducted_amount: Option<u64>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub fully_deducted: Option<serde_json::Value>,
    #[serde(default)]
    pub refunded_by: Option<String>,
    #[serde(default)]
    pub refunded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settlement: Option<serde_json::Value>,
    #[serde(default)]
    pub customer_note: Option<String>,
    #[serde(default)]
    pub merchant_note: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
