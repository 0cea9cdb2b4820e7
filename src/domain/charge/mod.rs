//! Charge domain: server-driven charges that may need extra customer input.

pub mod client;
pub mod wire;

use crate::domain::customer::Authorization;
use crate::domain::transaction::TransactionCustomer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use wire::{
    BankDetails, CardDetails, CreateChargeRequest, MobileMoneyDetails, SubmitAddressRequest,
    UssdDetails,
};

/// Charge state. The `send_*` states name the input Paystack is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    Failed,
    Pending,
    Timeout,
    SendPin,
    SendOtp,
    SendPhone,
    SendBirthday,
    SendAddress,
    OpenUrl,
    PayOffline,
    #[serde(other)]
    Unknown,
}

impl ChargeStatus {
    /// Whether the customer still has to supply something.
    pub fn needs_input(self) -> bool {
        matches!(
            self,
            ChargeStatus::SendPin
                | ChargeStatus::SendOtp
                | ChargeStatus::SendPhone
                | ChargeStatus::SendBirthday
                | ChargeStatus::SendAddress
                | ChargeStatus::OpenUrl
        )
    }
}

/// Result of a charge step. Intermediate steps only carry `reference`,
/// `status` and `display_text`; completed charges carry the full transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub reference: String,
    pub status: ChargeStatus,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub gateway_response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fees: Option<u64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub authorization: Option<Authorization>,
    #[serde(default)]
    pub customer: Option<TransactionCustomer>,
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
