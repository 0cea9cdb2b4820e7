//! Virtual terminals sub-client.

use crate::client::PaystackClient;
use crate::domain::split::Split;
use crate::domain::virtual_terminal::wire::{
    AssignDestinationRequest, CreateVirtualTerminalRequest, ListVirtualTerminalsQuery,
    SplitCodeRequest, UnassignDestinationRequest, UpdateVirtualTerminalRequest,
};
use crate::domain::virtual_terminal::{VirtualTerminal, VirtualTerminalDestination};
use crate::error::SdkResult;
use crate::http::client::NONE;
use crate::http::{Acknowledgement, Paginated};
use reqwest::Method;

/// Sub-client for virtual terminal operations.
pub struct VirtualTerminals<'a> {
    pub(crate) client: &'a PaystackClient,
}

fn path(code: &str, suffix: &str) -> String {
    format!("/virtual_terminal/{}{}", urlencoding::encode(code), suffix)
}

impl<'a> VirtualTerminals<'a> {
    pub async fn create(
        &self,
        request: &CreateVirtualTerminalRequest,
    ) -> SdkResult<VirtualTerminal> {
        self.client
            .http
            .post("/virtual_terminal", request, "Failed to create virtual terminal")
            .await
    }

    pub async fn list(
        &self,
        query: &ListVirtualTerminalsQuery,
    ) -> SdkResult<Paginated<VirtualTerminal>> {
        self.client
            .http
            .list(
                "/virtual_terminal",
                Some(query),
                "Failed to list virtual terminals",
            )
            .await
    }

    pub async fn fetch(&self, code: &str) -> SdkResult<VirtualTerminal> {
        self.client
            .http
            .get(&path(code, ""), "Failed to fetch virtual terminal")
            .await
    }

    pub async fn update(
        &self,
        code: &str,
        request: &UpdateVirtualTerminalRequest,
    ) -> SdkResult<VirtualTerminal> {
        self.client
            .http
            .put(&path(code, ""), request, "Failed to update virtual terminal")
            .await
    }

    pub async fn deactivate(&self, code: &str) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::PUT,
                &path(code, "/deactivate"),
                NONE,
                NONE,
                "Failed to deactivate virtual terminal",
            )
            .await
    }

    pub async fn assign_destination(
        &self,
        code: &str,
        request: &AssignDestinationRequest,
    ) -> SdkResult<Vec<VirtualTerminalDestination>> {
        self.client
            .http
            .post(
                &path(code, "/destination/assign"),
                request,
                "Failed to assign destination",
            )
            .await
    }

    pub async fn unassign_destination(
        &self,
        code: &str,
        request: &UnassignDestinationRequest,
    ) -> SdkResult<Acknowledgement> {
        self.client
            .http
            .acknowledge(
                Method::POST,
                &path(code, "/destination/unassign"),
                NONE,
                Some(request),
                "Failed to unassign destination",
            )
            .await
    }

    pub async fn add_split_code(&self, code: &str, split_code: &str) -> SdkResult<Split> {
        let body = SplitCodeRequest {
            split_code: split_code.to_string(),
        };
        self.client
            .http
            .put(&path(code, "/split_code"), &body, "Failed to add split code")
            .await
    }

    pub async fn remove_split_code(
        &self,
        code: &str,
        split_code: &str,
    ) -> SdkResult<Acknowledgement> {
        let body = SplitCodeRequest {
            split_code: split_code.to_string(),
        };
        self.client
            .http
            .acknowledge(
                Method::DELETE,
                &path(code, "/split_code"),
                NONE,
                Some(&body),
                "Failed to remove split code",
            )
            .await
    }
}
