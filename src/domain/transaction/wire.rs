//! Request bodies and query strings for transaction endpoints.

use crate::domain::transaction::{Bearer, Channel, TransactionStatus};
use crate::shared::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeTransactionRequest {
    pub email: String,
    /// Amount in subunits.
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
}

impl InitializeTransactionRequest {
    pub fn new(email: impl Into<String>, amount: u64) -> Self {
        Self {
            email: email.into(),
            amount,
            currency: None,
            reference: None,
            callback_url: None,
            plan: None,
            invoice_limit: None,
            metadata: None,
            channels: None,
            split_code: None,
            subaccount: None,
            transaction_charge: None,
            bearer: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_split_code(mut self, split_code: impl Into<String>) -> Self {
        self.split_code = Some(split_code.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTransactionsQuery {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Customer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
    #[serde(rename = "terminalid", skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ListTransactionsQuery {
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_customer(mut self, customer_id: u64) -> Self {
        self.customer = Some(customer_id);
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}

pub type TransactionTotalsQuery = Pagination;

/// Same filters as listing, plus settlement filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTransactionsQuery {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
    #[serde(rename = "terminalid", skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_page: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeAuthorizationRequest {
    pub email: String,
    pub amount: u64,
    pub authorization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
    /// Queue the charge when running many recurring charges at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<bool>,
}

impl ChargeAuthorizationRequest {
    pub fn new(
        email: impl Into<String>,
        amount: u64,
        authorization_code: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            amount,
            authorization_code: authorization_code.into(),
            reference: None,
            currency: None,
            metadata: None,
            channels: None,
            subaccount: None,
            transaction_charge: None,
            bearer: None,
            queue: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Debit whatever is available on an authorization, down to `at_least`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDebitRequest {
    pub authorization_code: String,
    /// `NGN` or `GHS`.
    pub currency: String,
    pub amount: u64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_least: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_body() {
        let req = InitializeTransactionRequest::new("a@b.com", 50_000)
            .with_channels(vec![Channel::Card, Channel::BankTransfer]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "a@b.com", "amount": 50000, "channels": ["card", "bank_transfer"]})
        );
    }

    #[test]
    fn test_list_query() {
        let q = ListTransactionsQuery::default()
            .with_status(TransactionStatus::Failed)
            .with_page(2, 10);
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "perPage=10&page=2&status=failed"
        );
    }

    #[test]
    fn test_export_query_settlement_filters() {
        let q = ExportTransactionsQuery {
            settled: Some(true),
            settlement: Some(42),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "settled=true&settlement=42"
        );
    }
}
