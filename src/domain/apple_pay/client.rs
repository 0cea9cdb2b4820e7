//! Apple Pay sub-client.

use crate::client::PaystackClient;
use crate::domain::apple_pay::wire::ApplePayDomainRequest;
use crate::domain::apple_pay::ApplePayDomain;
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::Acknowledgement;
use reqwest::Method;

const DOMAIN_PATH: &str = "/apple-pay/domain";

/// Sub-client for Apple Pay domain registration.
pub struct ApplePay<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> ApplePay<'a> {
    /// Paystack answers with only a confirmation message.
    pub async fn register_domain(&self, domain_name: &str) -> SdkResult<Acknowledgement> {
        self.domain_call(Method::POST, domain_name, "Failed to register domain")
            .await
    }

    pub async fn list_domains(&self) -> SdkResult<Vec<ApplePayDomain>> {
        self.client
            .http
            .get(DOMAIN_PATH, "Failed to fetch domains")
            .await
    }

    /// DELETE with a JSON body.
    pub async fn unregister_domain(&self, domain_name: &str) -> SdkResult<Acknowledgement> {
        self.domain_call(Method::DELETE, domain_name, "Failed to unregister domain")
            .await
    }

    async fn domain_call(
        &self,
        method: Method,
        domain_name: &str,
        fallback: &str,
    ) -> SdkResult<Acknowledgement> {
        let body = ApplePayDomainRequest::new(domain_name);
        self.client
            .http
            .acknowledge(method, DOMAIN_PATH, NONE, Some(&body), fallback)
            .await
    }
}
