//! Product domain: inventory items sold through payment pages.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{CreateProductRequest, UpdateProductRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFile {
    pub key: String,
    #[serde(default, rename = "type")]
    pub file_type: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub product_code: String,
    /// Price in subunits.
    pub price: u64,
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub quantity_sold: Option<u64>,
    #[serde(default)]
    pub unlimited: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub is_shippable: Option<bool>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub minimum_orderable: Option<u64>,
    #[serde(default)]
    pub maximum_orderable: Option<u64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub files: Vec<ProductFile>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
