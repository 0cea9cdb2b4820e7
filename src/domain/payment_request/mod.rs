//! Payment request domain: invoices sent to customers.

pub mod client;
pub mod wire;

use crate::domain::transaction::CurrencyAmount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    CreatePaymentRequestRequest, FinalizePaymentRequestRequest, LineItem,
    ListPaymentRequestsQuery, Tax, UpdatePaymentRequestRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentRequestStatus {
    Pending,
    Success,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A payment request. `customer` is an id right after creation and an
/// object on fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub id: u64,
    pub request_code: String,
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<PaymentRequestStatus>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub tax: Vec<Tax>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_invoice: bool,
    #[serde(default)]
    pub invoice_number: Option<u64>,
    #[serde(default)]
    pub offline_reference: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub customer: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Outstanding and collected amounts, one entry per currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequestTotals {
    #[serde(default)]
    pub pending: Vec<CurrencyAmount>,
    #[serde(default)]
    pub successful: Vec<CurrencyAmount>,
    #[serde(default)]
    pub total: Vec<CurrencyAmount>,
}
