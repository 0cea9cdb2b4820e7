//! Split domain: dividing transaction proceeds between subaccounts.

pub mod client;
pub mod wire;

use crate::shared::serde_util::opt_string_lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    CreateSplitRequest, ListSplitsQuery, RemoveSplitSubaccountRequest, SplitShare,
    UpdateSplitRequest,
};

/// Whether shares are percentages or flat subunit amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Percentage,
    Flat,
}

/// Who bears the Paystack fee on a split transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BearerType {
    Subaccount,
    Account,
    AllProportional,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSubaccount {
    pub id: u64,
    pub subaccount_code: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub settlement_bank: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMember {
    pub subaccount: SplitSubaccount,
    pub share: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub id: u64,
    pub name: String,
    pub split_code: String,
    #[serde(rename = "type")]
    pub split_type: SplitType,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub bearer_type: Option<BearerType>,
    /// Subaccount code or numeric id, depending on the endpoint.
    #[serde(default, deserialize_with = "opt_string_lenient::deserialize")]
    pub bearer_subaccount: Option<String>,
    #[serde(default)]
    pub is_dynamic: Option<bool>,
    #[serde(default)]
    pub subaccounts: Vec<SplitMember>,
    #[serde(default)]
    pub total_subaccounts: Option<u64>,
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
    fn test_split_deserialize() {
        let s: Split = serde_json::from_value(json!({
            "id": 142,
            "name": "Test Doc",
            "type": "percentage",
            "currency": "NGN",
            "split_code": "SPL_e7jnRLtzla",
            "active": true,
            "bearer_type": "all-proportional",
            "bearer_subaccount": 331,
            "subaccounts": [{
                "subaccount": {"id": 5, "subaccount_code": "ACCT_z3x6z3nbo14xsil"},
                "share": 20
            }],
            "total_subaccounts": 1
        }))
        .unwrap();
        assert_eq!(s.split_type, SplitType::Percentage);
        assert_eq!(s.bearer_type, Some(BearerType::AllProportional));
        assert_eq!(s.subaccounts[0].share, 20);
        assert_eq!(s.bearer_subaccount.as_deref(), Some("331"));
    }
}
