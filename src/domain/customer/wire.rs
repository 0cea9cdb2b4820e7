//! Request bodies and query strings for customer endpoints.

use crate::domain::customer::RiskAction;
use crate::shared::Pagination;
use serde::{Deserialize, Serialize};

/// `GET /customer` accepts the standard page window.
pub type ListCustomersQuery = Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreateCustomerRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            phone: None,
            metadata: None,
        }
    }

    pub fn with_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Identity check against a bank account. Only `bank_account` is accepted as
/// `type` today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    /// Two-letter ISO code of the issuing country.
    pub country: String,
    pub bvn: String,
    pub bank_code: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRiskActionRequest {
    /// Customer code or email.
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_action: Option<RiskAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDebitAccount {
    pub number: String,
    pub bank_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDebitAddress {
    pub street: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeAuthorizationRequest {
    pub email: String,
    /// Only `direct_debit` is supported.
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<DirectDebitAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<DirectDebitAddress>,
}

impl InitializeAuthorizationRequest {
    pub fn direct_debit(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            channel: "direct_debit".to_string(),
            callback_url: None,
            account: None,
            address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeDirectDebitRequest {
    pub account: DirectDebitAccount,
    pub address: DirectDebitAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationChargeRequest {
    pub authorization_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivateAuthorizationRequest {
    pub authorization_code: String,
}
