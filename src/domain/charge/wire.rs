//! Request bodies for charge endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub code: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub cvv: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UssdDetails {
    #[serde(rename = "type")]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMoneyDetails {
    pub phone: String,
    pub provider: String,
}

/// Body for `POST /charge`. Set exactly one payment instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChargeRequest {
    pub email: String,
    /// Amount in subunits.
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ussd: Option<UssdDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_money: Option<MobileMoneyDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreateChargeRequest {
    pub fn new(email: impl Into<String>, amount: u64) -> Self {
        Self {
            email: email.into(),
            amount,
            currency: None,
            reference: None,
            bank: None,
            card: None,
            ussd: None,
            mobile_money: None,
            authorization_code: None,
            pin: None,
            birthday: None,
            device_id: None,
            metadata: None,
        }
    }

    pub fn with_bank(mut self, code: impl Into<String>, account_number: impl Into<String>) -> Self {
        self.bank = Some(BankDetails {
            code: code.into(),
            account_number: account_number.into(),
        });
        self
    }

    pub fn with_authorization(mut self, authorization_code: impl Into<String>) -> Self {
        self.authorization_code = Some(authorization_code.into());
        self
    }

    pub fn with_mobile_money(
        mut self,
        phone: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        self.mobile_money = Some(MobileMoneyDetails {
            phone: phone.into(),
            provider: provider.into(),
        });
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// `{pin|otp|phone|birthday, reference}` bodies share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SubmitField<'a> {
    #[serde(flatten)]
    pub field: SubmitValue<'a>,
    pub reference: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SubmitValue<'a> {
    Pin(&'a str),
    Otp(&'a str),
    Phone(&'a str),
    Birthday(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAddressRequest {
    pub reference: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}
