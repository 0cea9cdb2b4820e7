//! Request body shared by domain registration and removal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayDomainRequest {
    #[serde(rename = "domainName")]
    pub domain_name: String,
}

impl ApplePayDomainRequest {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_body() {
        let body = serde_json::to_string(&ApplePayDomainRequest::new("example.com")).unwrap();
        assert_eq!(body, r#"{"domainName":"example.com"}"#);
    }
}
