//! Request bodies and queries for verification endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAccountQuery {
    pub account_number: String,
    pub bank_code: String,
}

impl ResolveAccountQuery {
    pub fn new(account_number: impl Into<String>, bank_code: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            bank_code: bank_code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    IdentityNumber,
    PassportNumber,
    BusinessRegistrationNumber,
}

/// Body for `POST /bank/validate` (South African accounts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAccountRequest {
    pub account_name: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub bank_code: String,
    pub country_code: String,
    pub document_type: DocumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_body() {
        let req = ValidateAccountRequest {
            account_name: "Ann Bron".into(),
            account_number: "0123456789".into(),
            account_type: AccountType::Personal,
            bank_code: "632005".into(),
            country_code: "ZA".into(),
            document_type: DocumentType::IdentityNumber,
            document_number: Some("1234567890123".into()),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["account_type"], json!("personal"));
        assert_eq!(v["document_type"], json!("identityNumber"));
    }

    #[test]
    fn test_resolve_query() {
        let q = ResolveAccountQuery::new("0022728151", "063");
        assert_eq!(
            serde_urlencoded::to_string(&q).unwrap(),
            "account_number=0022728151&bank_code=063"
        );
    }
}
