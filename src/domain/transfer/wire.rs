//! Request bodies and queries for transfer endpoints.

use crate::domain::transfer::{TransferSource, TransferStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiateTransferRequest {
    pub source: TransferSource,
    /// Amount in subunits.
    pub amount: u64,
    /// Recipient code.
    pub recipient: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<String>,
}

impl InitiateTransferRequest {
    pub fn new(amount: u64, recipient: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            source: TransferSource::Balance,
            amount,
            recipient: recipient.into(),
            reference: reference.into(),
            reason: None,
            currency: None,
            account_reference: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeTransferRequest {
    pub transfer_code: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTransferItem {
    pub amount: u64,
    pub reference: String,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTransferRequest {
    pub source: TransferSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub transfers: Vec<BulkTransferItem>,
}

impl BulkTransferRequest {
    pub fn new(transfers: Vec<BulkTransferItem>) -> Self {
        Self {
            source: TransferSource::Balance,
            currency: None,
            transfers,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTransfersQuery {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Filter by recipient id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransferStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}
