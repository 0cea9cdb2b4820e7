//! Dedicated virtual account domain: bank accounts assigned to customers.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    AssignDedicatedAccountRequest, CreateDedicatedAccountRequest, ListDedicatedAccountsQuery,
    RemoveSplitRequest, RequeryDedicatedAccountQuery, SplitDedicatedAccountRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBank {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCustomer {
    pub id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub customer_code: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicatedAccount {
    pub id: u64,
    pub account_name: String,
    pub account_number: String,
    #[serde(default)]
    pub bank: Option<AccountBank>,
    #[serde(default)]
    pub assigned: Option<bool>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub split_config: Option<serde_json::Value>,
    #[serde(default)]
    pub customer: Option<AccountCustomer>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A partner bank that can issue dedicated accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: u64,
    #[serde(default, alias = "bank_name")]
    pub name: Option<String>,
    #[serde(default, alias = "provider_slug")]
    pub slug: Option<String>,
    #[serde(default)]
    pub bank_id: Option<u64>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dedicated_account() {
        let a: DedicatedAccount = serde_json::from_value(json!({
            "id": 253,
            "account_name": "KAROKART/RHODA CHURCH",
            "account_number": "9930000737",
            "assigned": true,
            "currency": "NGN",
            "active": true,
            "bank": {"id": 1, "name": "Wema Bank", "slug": "wema-bank"},
            "customer": {"id": 1530104, "email": "rhoda@example.com"},
            "created_at": "2019-12-09T13:31:38.000Z"
        }))
        .unwrap();
        assert_eq!(a.bank.unwrap().slug, "wema-bank");
        assert_eq!(a.customer.unwrap().id, 1530104);
    }

    #[test]
    fn test_provider_field_aliases() {
        let p: Provider = serde_json::from_value(json!({
            "id": 1,
            "provider_slug": "access-bank",
            "bank_id": 1,
            "bank_name": "Access Bank"
        }))
        .unwrap();
        assert_eq!(p.slug.as_deref(), Some("access-bank"));
        assert_eq!(p.name.as_deref(), Some("Access Bank"));
    }
}
