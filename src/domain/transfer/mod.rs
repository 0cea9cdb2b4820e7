//! Transfer domain: payouts from the integration balance to recipients.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    BulkTransferItem, BulkTransferRequest, FinalizeTransferRequest, InitiateTransferRequest,
    ListTransfersQuery,
};

/// Where transfer funds are drawn from. Paystack only supports the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferSource {
    #[default]
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Pending,
    Success,
    Failed,
    Reversed,
    Received,
    Otp,
    Abandoned,
    Blocked,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// A transfer. `recipient` is an id on create and an object on fetch, so it
/// stays untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(default)]
    pub id: Option<u64>,
    pub amount: u64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: TransferStatus,
    pub transfer_code: String,
    #[serde(default)]
    pub titan_code: Option<String>,
    #[serde(default)]
    pub failures: Option<serde_json::Value>,
    #[serde(default)]
    pub transferred_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub recipient: Option<serde_json::Value>,
    #[serde(default)]
    pub source_details: Option<serde_json::Value>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transfer {
    /// Recipient code when the recipient came back expanded.
    pub fn recipient_code(&self) -> Option<&str> {
        self.recipient
            .as_ref()
            .and_then(|r| r.get("recipient_code"))
            .and_then(|c| c.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initiated_transfer() {
        let t: Transfer = serde_json::from_value(json!({
            "integration": 100073,
            "domain": "test",
            "amount": 3794800,
            "currency": "NGN",
            "source": "balance",
            "reason": "Calm down",
            "recipient": 28,
            "status": "otp",
            "transfer_code": "TRF_1ptvuv321ahaa7q",
            "id": 14,
            "createdAt": "2017-02-03T17:21:54.508Z",
            "updatedAt": "2017-02-03T17:21:54.508Z"
        }))
        .unwrap();
        assert_eq!(t.status, TransferStatus::Otp);
        assert_eq!(t.recipient_code(), None);
    }

    #[test]
    fn test_bulk_item_shape() {
        let t: Transfer = serde_json::from_value(json!({
            "reference": "acv_2627bbfe-1a2a-4a1a-8d0e-9d2ee6c31496",
            "recipient": {"recipient_code": "RCP_gd9vgag7n5lr5ix"},
            "amount": 20000,
            "transfer_code": "TRF_ful4rbyjh6wyfa9",
            "currency": "NGN",
            "status": "received"
        }))
        .unwrap();
        assert_eq!(t.id, None);
        assert_eq!(t.recipient_code(), Some("RCP_gd9vgag7n5lr5ix"));
    }
}
