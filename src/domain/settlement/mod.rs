//! Settlement domain: payouts from Paystack to the integration's bank.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::ListSettlementsQuery;

/// Transactions inside a settlement have the regular transaction shape.
pub use crate::domain::transaction::Transaction as SettlementTransaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Success,
    Processing,
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A settlement. All amounts are in subunits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: u64,
    pub status: SettlementStatus,
    pub currency: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub total_amount: u64,
    #[serde(default)]
    pub effective_amount: u64,
    #[serde(default)]
    pub total_fees: u64,
    #[serde(default)]
    pub total_processed: u64,
    #[serde(default)]
    pub deductions: Option<serde_json::Value>,
    #[serde(default)]
    pub settlement_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settled_by: Option<String>,
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
    fn test_settlement() {
        let s: Settlement = serde_json::from_value(json!({
            "id": 3090024,
            "domain": "live",
            "status": "success",
            "currency": "NGN",
            "total_amount": 10000,
            "effective_amount": 9850,
            "total_fees": 150,
            "settlement_date": "2022-11-09T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(s.status, SettlementStatus::Success);
        assert_eq!(s.total_amount - s.total_fees, s.effective_amount);
    }
}
