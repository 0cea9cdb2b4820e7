//! Request bodies and queries for dispute endpoints.

use crate::domain::dispute::DisputeStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDisputesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Transaction id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DisputeStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDisputeRequest {
    pub refund_amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeEvidenceRequest {
    pub customer_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisputeResolution {
    #[serde(rename = "merchant-accepted")]
    MerchantAccepted,
    #[serde(rename = "declined")]
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveDisputeRequest {
    pub resolution: DisputeResolution,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_filename: Option<String>,
    /// Evidence id returned by `add_evidence`, required when declining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<u64>,
}

impl ResolveDisputeRequest {
    pub fn accept(message: impl Into<String>, refund_amount: u64) -> Self {
        Self {
            resolution: DisputeResolution::MerchantAccepted,
            message: message.into(),
            refund_amount: Some(refund_amount),
            uploaded_filename: None,
            evidence: None,
        }
    }

    pub fn decline(message: impl Into<String>, evidence: u64) -> Self {
        Self {
            resolution: DisputeResolution::Declined,
            message: message.into(),
            refund_amount: None,
            uploaded_filename: None,
            evidence: Some(evidence),
        }
    }

    pub fn with_uploaded_filename(mut self, name: impl Into<String>) -> Self {
        self.uploaded_filename = Some(name.into());
        self
    }
}

/// Query for the upload URL endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UploadUrlQuery<'a> {
    pub upload_filename: &'a str,
}
