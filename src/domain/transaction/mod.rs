//! Transaction domain: payments, verification, totals and exports.

pub mod client;
pub mod wire;

use crate::domain::customer::Authorization;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use wire::{
    ChargeAuthorizationRequest, ExportTransactionsQuery, InitializeTransactionRequest,
    ListTransactionsQuery, PartialDebitRequest, TransactionTotalsQuery,
};

/// Payment channel offered on checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Card,
    Bank,
    ApplePay,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    Eft,
    Payattitude,
}

/// Who pays the Paystack fee on a transaction with a subaccount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bearer {
    Account,
    Subaccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failed,
    Abandoned,
    Ongoing,
    Pending,
    Processing,
    Queued,
    Reversed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCustomer {
    #[serde(default)]
    pub id: Option<u64>,
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
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub risk_action: Option<String>,
}

/// A transaction. Amounts are in subunits.
///
/// Paystack attaches many endpoint-specific fields (log, plan, split,
/// source...); anything not modelled here is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub reference: String,
    pub amount: u64,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
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
    pub ip_address: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub customer: Option<TransactionCustomer>,
    #[serde(default)]
    pub authorization: Option<Authorization>,
    // Paystack sends both spellings of the timestamps on transactions; the
    // snake_case copies end up in `extra`.
    #[serde(default, rename = "paidAt")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Transaction {
    pub fn is_successful(&self) -> bool {
        self.status == Some(TransactionStatus::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInitialization {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTotals {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub unique_customers: Option<u64>,
    #[serde(default)]
    pub total_volume: u64,
    #[serde(default)]
    pub total_volume_by_currency: Vec<CurrencyAmount>,
    #[serde(default)]
    pub pending_transfers: u64,
    #[serde(default)]
    pub pending_transfers_by_currency: Vec<CurrencyAmount>,
}

/// Location of a generated CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionExport {
    pub path: String,
    #[serde(default, rename = "expiresAt", alias = "expires_at")]
    pub expires_at: Option<DateTime<Utc>>,
}
