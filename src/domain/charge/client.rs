//! Charges sub-client.

use crate::client::PaystackClient;
use crate::domain::charge::wire::{
    CreateChargeRequest, SubmitAddressRequest, SubmitField, SubmitValue,
};
use crate::domain::charge::Charge;
use crate::error::SdkResult;

/// Sub-client for direct charges.
///
/// Each `submit_*` call answers the `send_*` status returned by the previous
/// step and yields the next state.
pub struct Charges<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Charges<'a> {
    pub async fn create(&self, request: &CreateChargeRequest) -> SdkResult<Charge> {
        self.client
            .http
            .post("/charge", request, "Failed to create charge")
            .await
    }

    pub async fn submit_pin(&self, pin: &str, reference: &str) -> SdkResult<Charge> {
        self.submit("/charge/submit_pin", SubmitValue::Pin(pin), reference, "Failed to submit PIN")
            .await
    }

    pub async fn submit_otp(&self, otp: &str, reference: &str) -> SdkResult<Charge> {
        self.submit("/charge/submit_otp", SubmitValue::Otp(otp), reference, "Failed to submit OTP")
            .await
    }

    pub async fn submit_phone(&self, phone: &str, reference: &str) -> SdkResult<Charge> {
        self.submit(
            "/charge/submit_phone",
            SubmitValue::Phone(phone),
            reference,
            "Failed to submit phone",
        )
        .await
    }

    /// `birthday` is `YYYY-MM-DD`.
    pub async fn submit_birthday(&self, birthday: &str, reference: &str) -> SdkResult<Charge> {
        self.submit(
            "/charge/submit_birthday",
            SubmitValue::Birthday(birthday),
            reference,
            "Failed to submit birthday",
        )
        .await
    }

    pub async fn submit_address(&self, request: &SubmitAddressRequest) -> SdkResult<Charge> {
        self.client
            .http
            .post("/charge/submit_address", request, "Failed to submit address")
            .await
    }

    /// Polls a charge left in `pending`. Paystack asks for at least 10 s
    /// between checks.
    pub async fn check_pending(&self, reference: &str) -> SdkResult<Charge> {
        let path = format!("/charge/{}", urlencoding::encode(reference));
        self.client
            .http
            .get(&path, "Failed to check pending charge")
            .await
    }

    async fn submit(
        &self,
        path: &str,
        field: SubmitValue<'_>,
        reference: &str,
        fallback: &str,
    ) -> SdkResult<Charge> {
        let body = SubmitField { field, reference };
        self.client.http.post(path, &body, fallback).await
    }
}
