//! Bulk charge domain: charging many saved authorizations in one batch.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{BulkChargeItem, BulkChargeItemsQuery, BulkChargeStatus};

/// A queued batch of authorization charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkChargeBatch {
    pub batch_code: String,
    pub status: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub total_charges: Option<u64>,
    #[serde(default)]
    pub pending_charges: Option<u64>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One charge inside a batch. `customer`, `authorization` and `transaction`
/// come back expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCharge {
    pub id: u64,
    pub amount: u64,
    pub status: BulkChargeStatus,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub bulkcharge: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub customer: Option<serde_json::Value>,
    #[serde(default)]
    pub authorization: Option<serde_json::Value>,
    #[serde(default)]
    pub transaction: Option<serde_json::Value>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch() {
        let b: BulkChargeBatch = serde_json::from_value(json!({
            "batch_code": "BCH_180tl7oq7cayggh",
            "reference": "bulkcharge-1663150565684-p08dspb9ze",
            "id": 62,
            "integration": 463433,
            "domain": "test",
            "status": "active",
            "total_charges": 2,
            "pending_charges": 2,
            "createdAt": "2022-09-14T10:16:05.000Z",
            "updatedAt": "2022-09-14T10:16:05.000Z"
        }))
        .unwrap();
        assert_eq!(b.batch_code, "BCH_180tl7oq7cayggh");
        assert_eq!(b.pending_charges, Some(2));
    }

    #[test]
    fn test_charge() {
        let c: BulkCharge = serde_json::from_value(json!({
            "integration": 100073,
            "bulkcharge": 18,
            "customer": {"id": 181336, "email": "dummy@email.com"},
            "authorization": {"authorization_code": "AUTH_ixvqi4cr4g"},
            "transaction": {"reference": "2229d01d-7s4a-4f8c-97f1-6dbfa15a4227"},
            "domain": "test",
            "amount": 50000,
            "currency": "NGN",
            "status": "success",
            "id": 15
        }))
        .unwrap();
        assert_eq!(c.status, BulkChargeStatus::Success);
        assert_eq!(c.authorization.unwrap()["authorization_code"], "AUTH_ixvqi4cr4g");
    }
}
