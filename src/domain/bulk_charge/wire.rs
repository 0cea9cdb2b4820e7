//! Request bodies and queries for bulk charge endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkChargeStatus {
    Pending,
    Success,
    Failed,
    #[serde(other)]
    Unknown,
}

/// One entry of the batch posted to `/bulkcharge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkChargeItem {
    pub authorization: String,
    /// Amount in subunits.
    pub amount: u64,
    pub reference: String,
}

impl BulkChargeItem {
    pub fn new(
        authorization: impl Into<String>,
        amount: u64,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            authorization: authorization.into(),
            amount,
            reference: reference.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkChargeItemsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BulkChargeStatus>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_body_is_a_bare_array() {
        let batch = vec![
            BulkChargeItem::new("AUTH_ncx8hews93", 2500, "dam1266638dhhd"),
            BulkChargeItem::new("AUTH_xfuz7dy4b9", 1500, "dam1266638dhhe"),
        ];
        let v = serde_json::to_value(&batch).unwrap();
        assert!(v.is_array());
        assert_eq!(
            v[1],
            json!({
                "authorization": "AUTH_xfuz7dy4b9",
                "amount": 1500,
                "reference": "dam1266638dhhe"
            })
        );
    }

    #[test]
    fn test_items_query() {
        let q = BulkChargeItemsQuery {
            status: Some(BulkChargeStatus::Failed),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(serde_urlencoded::to_string(&q).unwrap(), "status=failed&page=2");
    }
}
