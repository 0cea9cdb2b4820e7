//! Verification domain: account name lookup, account validation and card BINs.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use wire::{AccountType, DocumentType, ResolveAccountQuery, ValidateAccountRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAccount {
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub bank_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValidation {
    pub verified: bool,
    #[serde(rename = "verificationMessage")]
    pub verification_message: String,
}

/// Issuer details for the first six digits of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBin {
    pub bin: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub sub_brand: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub linked_bank_id: Option<u64>,
}
