//! Request bodies for transfer recipient endpoints.

use crate::domain::transfer_recipient::RecipientType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRecipientRequest {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Required for [`RecipientType::Authorization`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreateTransferRecipientRequest {
    /// A bank-account recipient (`nuban`, `ghipss`, `basa`, `mobile_money`).
    pub fn bank_account(
        recipient_type: RecipientType,
        name: impl Into<String>,
        account_number: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        Self {
            recipient_type,
            name: name.into(),
            account_number: Some(account_number.into()),
            bank_code: Some(bank_code.into()),
            currency: None,
            description: None,
            authorization_code: None,
            metadata: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCreateTransferRecipientRequest {
    pub batch: Vec<CreateTransferRecipientRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTransferRecipientRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
