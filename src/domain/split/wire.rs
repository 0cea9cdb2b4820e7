//! Request bodies and query strings for split endpoints.

use crate::domain::split::{BearerType, SplitType};
use serde::{Deserialize, Serialize};

/// One subaccount's share in a split. Also the body of "add subaccount".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitShare {
    pub subaccount: String,
    pub share: u64,
}

impl SplitShare {
    pub fn new(subaccount: impl Into<String>, share: u64) -> Self {
        Self {
            subaccount: subaccount.into(),
            share,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSplitRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub split_type: SplitType,
    pub currency: String,
    pub subaccounts: Vec<SplitShare>,
    pub bearer_type: BearerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSplitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_type: Option<BearerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSplitSubaccountRequest {
    pub subaccount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSplitsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}
