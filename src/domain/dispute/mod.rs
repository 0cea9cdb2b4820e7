//! Dispute domain: chargebacks raised against transactions.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    DisputeEvidenceRequest, DisputeResolution, ListDisputesQuery, ResolveDisputeRequest,
    UpdateDisputeRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisputeStatus {
    AwaitingMerchantFeedback,
    AwaitingBankFeedback,
    Pending,
    Resolved,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: u64,
    pub status: DisputeStatus,
    #[serde(default)]
    pub refund_amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub transaction: Option<serde_json::Value>,
    #[serde(default)]
    pub transaction_reference: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub customer: Option<serde_json::Value>,
    #[serde(default)]
    pub bin: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub evidence: Option<serde_json::Value>,
    #[serde(default)]
    pub attachments: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
    #[serde(default, rename = "dueAt")]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "resolvedAt")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pre-signed location for an evidence upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadUrl {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}
