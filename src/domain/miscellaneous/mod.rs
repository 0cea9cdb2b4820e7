//! Reference data: supported banks and countries.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{BankCountry, BankGateway, ListBanksQuery};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: u64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub longcode: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub pay_with_bank: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_deleted: Option<bool>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "type")]
    pub bank_type: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u64,
    pub name: String,
    pub iso_code: String,
    #[serde(default)]
    pub default_currency_code: Option<String>,
    #[serde(default)]
    pub integration_defaults: Option<serde_json::Value>,
    /// Supported currencies, integration types and payment methods.
    #[serde(default)]
    pub relationships: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bank() {
        let b: Bank = serde_json::from_value(json!({
            "name": "Abbey Mortgage Bank",
            "slug": "abbey-mortgage-bank",
            "code": "801",
            "longcode": "",
            "gateway": null,
            "pay_with_bank": false,
            "active": true,
            "is_deleted": false,
            "country": "Nigeria",
            "currency": "NGN",
            "type": "nuban",
            "id": 174,
            "createdAt": "2020-12-07T16:19:09.000Z",
            "updatedAt": "2020-12-07T16:19:19.000Z"
        }))
        .unwrap();
        assert_eq!(b.code, "801");
        assert_eq!(b.bank_type.as_deref(), Some("nuban"));
        assert_eq!(b.gateway, None);
    }
}
