//! Transfer recipient domain: beneficiaries that transfers are sent to.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    BulkCreateTransferRecipientRequest, CreateTransferRecipientRequest,
    UpdateTransferRecipientRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    /// Nigerian bank account.
    Nuban,
    /// Ghanaian bank account.
    Ghipss,
    MobileMoney,
    /// South African bank account.
    Basa,
    /// A saved card or account authorization.
    Authorization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientDetails {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecipient {
    pub id: u64,
    pub recipient_code: String,
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub name: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub details: Option<RecipientDetails>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default, rename = "isDeleted")]
    pub is_deleted: Option<bool>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Outcome of a bulk create: created recipients and per-item failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkRecipients {
    #[serde(default)]
    pub success: Vec<TransferRecipient>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipient() {
        let r: TransferRecipient = serde_json::from_value(json!({
            "id": 6788170,
            "recipient_code": "RCP_t0ya41mp35flk40",
            "type": "nuban",
            "name": "Tolu Robert",
            "currency": "NGN",
            "active": true,
            "isDeleted": false,
            "details": {
                "authorization_code": null,
                "account_number": "01000000010",
                "account_name": "Tolu Robert",
                "bank_code": "058",
                "bank_name": "Guaranty Trust Bank"
            }
        }))
        .unwrap();
        assert_eq!(r.recipient_type, RecipientType::Nuban);
        assert_eq!(r.details.unwrap().bank_code.as_deref(), Some("058"));
        assert_eq!(r.is_deleted, Some(false));
    }
}
