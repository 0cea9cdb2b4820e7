//! Payment page domain: hosted checkout pages.

pub mod client;
pub mod wire;

use crate::shared::serde_util::opt_string_lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use wire::{AddProductsRequest, CreatePageRequest, PageType, UpdatePageRequest};

/// A product listed on a payment page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProduct {
    pub product_id: u64,
    pub name: String,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPage {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "type")]
    pub page_type: Option<PageType>,
    /// Plan id, when the page sells a subscription.
    #[serde(default, deserialize_with = "opt_string_lenient::deserialize")]
    pub plan: Option<String>,
    #[serde(default)]
    pub fixed_amount: Option<bool>,
    #[serde(default)]
    pub split_code: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
    #[serde(default)]
    pub notification_email: Option<String>,
    #[serde(default)]
    pub collect_phone: Option<bool>,
    #[serde(default)]
    pub custom_fields: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub products: Vec<PageProduct>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
