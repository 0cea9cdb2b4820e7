//! Request bodies and query strings for plan endpoints.

use crate::domain::plan::Interval;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    /// Amount in subunits.
    pub amount: u64,
    pub interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Invoices to raise before the subscription stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreatePlanRequest {
    pub fn new(name: impl Into<String>, amount: u64, interval: Interval) -> Self {
        Self {
            name: name.into(),
            amount,
            interval,
            description: None,
            send_invoices: None,
            send_sms: None,
            currency: None,
            invoice_limit: None,
            metadata: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_invoice_limit(mut self, limit: u32) -> Self {
        self.invoice_limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    /// Apply the change to existing subscriptions too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_existing_subscriptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPlansQuery {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_plan_body() {
        let req = CreatePlanRequest::new("Pro", 250_000, Interval::Annually).with_currency("GHS");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "Pro", "amount": 250000, "interval": "annually", "currency": "GHS"})
        );
    }

    #[test]
    fn test_list_query_interval() {
        let q = ListPlansQuery {
            interval: Some(Interval::Weekly),
            ..Default::default()
        };
        assert_eq!(serde_urlencoded::to_string(&q).unwrap(), "interval=weekly");
    }
}
