//! Request bodies and query strings for direct debit endpoints.

use crate::domain::direct_debit::MandateStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationChargeBatchRequest {
    pub customer_ids: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandateAuthorizationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MandateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl MandateAuthorizationsQuery {
    pub fn with_status(mut self, status: MandateStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_encoding() {
        let q = MandateAuthorizationsQuery::default()
            .with_status(MandateStatus::Pending)
            .with_per_page(25);
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "status=pending&per_page=25"
        );
    }
}
