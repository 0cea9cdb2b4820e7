//! Transfer control: balance, ledger and the transfer OTP setting.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{FinalizeDisableOtpRequest, ResendOtpReason, ResendOtpRequest};

/// Available balance in one currency, in subunits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: String,
    pub balance: i64,
}

/// One balance movement. `difference` is negative for debits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLedgerEntry {
    pub id: u64,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    pub balance: i64,
    pub currency: String,
    pub difference: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub model_responsible: Option<String>,
    #[serde(default)]
    pub model_row: Option<u64>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
