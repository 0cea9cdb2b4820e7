//! Request bodies and query strings for subaccount endpoints.

use crate::shared::Pagination;
use serde::{Deserialize, Serialize};

pub type ListSubaccountsQuery = Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubaccountRequest {
    pub business_name: String,
    /// Bank code, e.g. `058`.
    pub settlement_bank: String,
    pub account_number: String,
    /// Percentage the main account keeps on each transaction.
    pub percentage_charge: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubaccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_charge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}
