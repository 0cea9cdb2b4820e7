//! Direct debit sub-client.

use crate::client::PaystackClient;
use crate::domain::direct_debit::wire::{ActivationChargeBatchRequest, MandateAuthorizationsQuery};
use crate::domain::direct_debit::MandateAuthorization;
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for integration-wide direct debit operations.
pub struct DirectDebit<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> DirectDebit<'a> {
    /// Charge each listed customer's pending mandate to activate it.
    pub async fn trigger_activation_charge(
        &self,
        request: &ActivationChargeBatchRequest,
    ) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::PUT,
                "/directdebit/activation-charge",
                NONE,
                Some(request),
                "Failed to trigger activation charge",
            )
            .await
    }

    pub async fn list_mandate_authorizations(
        &self,
        query: &MandateAuthorizationsQuery,
    ) -> SdkResult<Paginated<MandateAuthorization>> {
        self.client
            .http
            .list(
                "/directdebit/mandate-authorizations",
                Some(query),
                "Failed to fetch mandate authorizations",
            )
            .await
    }
}
