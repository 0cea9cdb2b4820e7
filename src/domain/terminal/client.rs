//! Terminals sub-client.

use crate::client::PaystackClient;
use crate::domain::terminal::wire::{
    SendTerminalEventRequest, TerminalDeviceRequest, UpdateTerminalRequest,
};
use crate::domain::terminal::{Terminal, TerminalEvent, TerminalEventStatus, TerminalPresence};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use crate::shared::CursorPagination;
use reqwest::Method;

/// Sub-client for Paystack Terminal devices.
pub struct Terminals<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Terminals<'a> {
    pub async fn send_event(
        &self,
        terminal_id: &str,
        request: &SendTerminalEventRequest,
    ) -> SdkResult<TerminalEvent> {
        let path = format!("/terminal/{}/event", urlencoding::encode(terminal_id));
        self.client
            .http
            .post(&path, request, "Failed to send terminal event")
            .await
    }

    pub async fn fetch_event_status(
        &self,
        terminal_id: &str,
        event_id: &str,
    ) -> SdkResult<TerminalEventStatus> {
        let path = format!(
            "/terminal/{}/event/{}",
            urlencoding::encode(terminal_id),
            urlencoding::encode(event_id)
        );
        self.client
            .http
            .get(&path, "Failed to fetch terminal event status")
            .await
    }

    pub async fn fetch_presence(&self, terminal_id: &str) -> SdkResult<TerminalPresence> {
        let path = format!("/terminal/{}/presence", urlencoding::encode(terminal_id));
        self.client
            .http
            .get(&path, "Failed to fetch terminal presence")
            .await
    }

    pub async fn list(&self, query: &CursorPagination) -> SdkResult<Paginated<Terminal>> {
        self.client
            .http
            .list("/terminal", Some(query), "Failed to list terminals")
            .await
    }

    pub async fn fetch(&self, terminal_id: &str) -> SdkResult<Terminal> {
        let path = format!("/terminal/{}", urlencoding::encode(terminal_id));
        self.client
            .http
            .get(&path, "Failed to fetch terminal")
            .await
    }

    pub async fn update(
        &self,
        terminal_id: &str,
        request: &UpdateTerminalRequest,
    ) -> SdkResult<Acknowledgement> {
        let path = format!("/terminal/{}", urlencoding::encode(terminal_id));
        self.client
            .http
            .acknowledge(
                Method::PUT,
                &path,
                NONE,
                Some(request),
                "Failed to update terminal",
            )
            .await
    }

    pub async fn commission(&self, serial_number: &str) -> SdkResult<Acknowledgement> {
        self.device_call(
            "/terminal/commission_device",
            serial_number,
            "Failed to commission terminal",
        )
        .await
    }

    pub async fn decommission(&self, serial_number: &str) -> SdkResult<Acknowledgement> {
        self.device_call(
            "/terminal/decommission_device",
            serial_number,
            "Failed to decommission terminal",
        )
        .await
    }

    async fn device_call(
        &self,
        path: &str,
        serial_number: &str,
        fallback: &str,
    ) -> SdkResult<Acknowledgement> {
        let body = TerminalDeviceRequest {
            serial_number: serial_number.to_string(),
        };
        self.client
            .http
            .acknowledge(Method::POST, path, NONE, Some(&body), fallback)
            .await
    }
}
