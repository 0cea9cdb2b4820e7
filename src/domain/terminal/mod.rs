//! Terminal domain: physical POS devices and the events pushed to them.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use wire::{
    SendTerminalEventRequest, TerminalDeviceRequest, TerminalEventAction, TerminalEventType,
    UpdateTerminalRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    pub id: u64,
    pub terminal_id: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub device_make: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Id of an event queued for a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalEvent {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalEventStatus {
    pub delivered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalPresence {
    pub online: bool,
    pub available: bool,
}
