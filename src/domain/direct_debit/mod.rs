//! Direct debit domain: mandate authorizations and activation charges.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use wire::{ActivationChargeBatchRequest, MandateAuthorizationsQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MandateStatus {
    Pending,
    Active,
    Revoked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandateBank {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A direct debit mandate on a customer's bank account.
///
/// The integration-wide and per-customer listings return slightly different
/// shapes; fields only one of them sends land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandateAuthorization {
    pub id: u64,
    #[serde(default)]
    pub customer_id: Option<u64>,
    #[serde(default)]
    pub mandate_code: Option<String>,
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(default)]
    pub bank: Option<MandateBank>,
    #[serde(default)]
    pub status: Option<MandateStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mandate_with_unknown_fields() {
        let m: MandateAuthorization = serde_json::from_value(json!({
            "id": 1,
            "customer_id": 9,
            "mandate_code": "MND_1",
            "bank": {"id": 3, "name": "Access Bank", "slug": "access-bank"},
            "status": "active",
            "created_at": "2024-05-01T10:00:00.000Z",
            "account_number": "0123456789"
        }))
        .unwrap();
        assert_eq!(m.status, Some(MandateStatus::Active));
        assert_eq!(m.bank.unwrap().slug.as_deref(), Some("access-bank"));
        assert_eq!(m.extra["account_number"], "0123456789");
    }
}
