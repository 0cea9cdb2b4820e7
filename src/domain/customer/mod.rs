//! Customer domain: customer records, saved authorizations, direct debit.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    ActivationChargeRequest, CreateCustomerRequest, DeactivateAuthorizationRequest,
    DirectDebitAccount, DirectDebitAddress, InitializeAuthorizationRequest,
    InitializeDirectDebitRequest, ListCustomersQuery, SetRiskActionRequest,
    UpdateCustomerRequest, ValidateCustomerRequest,
};

/// Fraud-screening action attached to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
}

/// A customer as returned by create, list and set-risk-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: u64,
    pub customer_code: String,
    pub email: String,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub risk_action: Option<RiskAction>,
    #[serde(default)]
    pub identified: Option<bool>,
    #[serde(default)]
    pub identifications: Option<serde_json::Value>,
    // Fetch responses may repeat these as created_at/updated_at.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(f), Some(l)) => Some(format!("{} {}", f, l)),
            (Some(n), None) | (None, Some(n)) => Some(n.to_string()),
            (None, None) => None,
        }
    }
}

/// A single customer with its transaction history and saved cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
    #[serde(default)]
    pub subscriptions: Vec<serde_json::Value>,
    #[serde(default)]
    pub authorizations: Vec<Authorization>,
    #[serde(default)]
    pub total_transactions: Option<u64>,
    #[serde(default)]
    pub total_transaction_value: Option<serde_json::Value>,
    #[serde(default)]
    pub dedicated_account: Option<serde_json::Value>,
}

/// A reusable payment authorization (card, bank account, mandate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(default)]
    pub authorization_code: String,
    #[serde(default)]
    pub bin: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub exp_month: Option<String>,
    #[serde(default)]
    pub exp_year: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub reusable: Option<bool>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
}

/// Returned by the authorization and direct-debit initialization calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationInitialization {
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub access_code: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationCustomer {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Outcome of verifying an authorization reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedAuthorization {
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub customer: Option<AuthorizationCustomer>,
}
