//! Integration sub-client.

use crate::client::PaystackClient;
use crate::domain::integration::{PaymentSessionTimeout, UpdatePaymentSessionTimeoutRequest};
use crate::error::SdkResult;

const SESSION_TIMEOUT_PATH: &str = "/integration/payment_session_timeout";

/// Sub-client for integration-wide settings.
pub struct Integration<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Integration<'a> {
    pub async fn fetch_payment_session_timeout(&self) -> SdkResult<PaymentSessionTimeout> {
        self.client
            .http
            .get(SESSION_TIMEOUT_PATH, "Failed to fetch payment session timeout")
            .await
    }

    pub async fn update_payment_session_timeout(
        &self,
        timeout_secs: u64,
    ) -> SdkResult<PaymentSessionTimeout> {
        let body = UpdatePaymentSessionTimeoutRequest {
            timeout: timeout_secs,
        };
        self.client
            .http
            .put(
                SESSION_TIMEOUT_PATH,
                &body,
                "Failed to update payment session timeout",
            )
            .await
    }
}
