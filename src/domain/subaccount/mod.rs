//! Subaccount domain: partner accounts that receive a share of payments.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use wire::{CreateSubaccountRequest, ListSubaccountsQuery, UpdateSubaccountRequest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subaccount {
    pub id: u64,
    pub subaccount_code: String,
    pub business_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub percentage_charge: Option<f64>,
    #[serde(default)]
    pub settlement_bank: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
