//! Customers sub-client.

use crate::client::PaystackClient;
use crate::domain::customer::wire::{
    ActivationChargeRequest, CreateCustomerRequest, DeactivateAuthorizationRequest,
    InitializeAuthorizationRequest, InitializeDirectDebitRequest, ListCustomersQuery,
    SetRiskActionRequest, UpdateCustomerRequest, ValidateCustomerRequest,
};
use crate::domain::customer::{
    AuthorizationInitialization, Customer, CustomerDetails, VerifiedAuthorization,
};
use crate::domain::direct_debit::MandateAuthorization;
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for customer operations.
pub struct Customers<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Customers<'a> {
    pub async fn create(&self, request: &CreateCustomerRequest) -> SdkResult<Customer> {
        self.client
            .http
            .post("/customer", request, "Failed to create customer")
            .await
    }

    pub async fn list(&self, query: &ListCustomersQuery) -> SdkResult<Paginated<Customer>> {
        self.client
            .http
            .list("/customer", Some(query), "Failed to list customers")
            .await
    }

    /// Fetch by email or customer code.
    pub async fn fetch(&self, email_or_code: &str) -> SdkResult<CustomerDetails> {
        let path = format!("/customer/{}", urlencoding::encode(email_or_code));
        self.client
            .http
            .get(&path, "Failed to fetch customer")
            .await
    }

    pub async fn update(
        &self,
        code: &str,
        request: &UpdateCustomerRequest,
    ) -> SdkResult<CustomerDetails> {
        let path = format!("/customer/{}", urlencoding::encode(code));
        self.client
            .http
            .put(&path, request, "Failed to update customer")
            .await
    }

    /// Submit identification. The outcome arrives later by webhook.
    pub async fn validate(
        &self,
        code: &str,
        request: &ValidateCustomerRequest,
    ) -> SdkResult<Acknowledgement> {
        let path = format!("/customer/{}/identification", urlencoding::encode(code));
        self.client
            .http
            .acknowledge(
                Method::POST,
                &path,
                NONE,
                Some(request),
                "Failed to validate customer",
            )
            .await
    }

    pub async fn set_risk_action(&self, request: &SetRiskActionRequest) -> SdkResult<Customer> {
        self.client
            .http
            .post(
                "/customer/set_risk_action",
                request,
                "Failed to set customer risk action",
            )
            .await
    }

    pub async fn initialize_authorization(
        &self,
        request: &InitializeAuthorizationRequest,
    ) -> SdkResult<AuthorizationInitialization> {
        self.client
            .http
            .post(
                "/customer/authorization/initialize",
                request,
                "Failed to initialize authorization",
            )
            .await
    }

    pub async fn verify_authorization(&self, reference: &str) -> SdkResult<VerifiedAuthorization> {
        let path = format!(
            "/customer/authorization/verify/{}",
            urlencoding::encode(reference)
        );
        self.client
            .http
            .get(&path, "Failed to verify authorization")
            .await
    }

    pub async fn initialize_direct_debit(
        &self,
        customer_id: u64,
        request: &InitializeDirectDebitRequest,
    ) -> SdkResult<AuthorizationInitialization> {
        let path = format!("/customer/{}/initialize-direct-debit", customer_id);
        self.client
            .http
            .post(&path, request, "Failed to initialize direct debit")
            .await
    }

    pub async fn direct_debit_activation_charge(
        &self,
        customer_id: u64,
        request: &ActivationChargeRequest,
    ) -> SdkResult<Acknowledgement> {
        let path = format!("/customer/{}/directdebit-activation-charge", customer_id);
        self.client
            .http
            .acknowledge(
                Method::PUT,
                &path,
                NONE,
                Some(request),
                "Failed to trigger activation charge",
            )
            .await
    }

    pub async fn fetch_mandate_authorizations(
        &self,
        customer_id: u64,
    ) -> SdkResult<Paginated<MandateAuthorization>> {
        let path = format!(
            "/customer/{}/directdebit-mandate-authorizations",
            customer_id
        );
        self.client
            .http
            .list(&path, NONE, "Failed to fetch mandate authorizations")
            .await
    }

    pub async fn deactivate_authorization(
        &self,
        authorization_code: &str,
    ) -> SdkResult<Acknowledgement> {
        let body = DeactivateAuthorizationRequest {
            authorization_code: authorization_code.to_string(),
        };
        self.client
            .http
            .acknowledge(
                Method::POST,
                "/customer/authorization/deactivate",
                NONE,
                Some(&body),
                "Failed to deactivate authorization",
            )
            .await
    }
}
