//! Request bodies and query strings for dedicated account endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDedicatedAccountRequest {
    /// Customer id or code.
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
}

impl CreateDedicatedAccountRequest {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            preferred_bank: None,
            subaccount: None,
            split_code: None,
        }
    }

    pub fn with_preferred_bank(mut self, bank_slug: impl Into<String>) -> Self {
        self.preferred_bank = Some(bank_slug.into());
        self
    }
}

/// Attach a subaccount or split to an existing dedicated account.
pub type SplitDedicatedAccountRequest = CreateDedicatedAccountRequest;

/// Create a customer and assign them a dedicated account in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignDedicatedAccountRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDedicatedAccountsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequeryDedicatedAccountQuery {
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_slug: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSplitRequest {
    pub account_number: String,
    pub provider_slug: String,
}
