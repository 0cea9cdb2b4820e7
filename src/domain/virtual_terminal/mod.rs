//! Virtual terminal domain: WhatsApp-delivered payment terminals.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::{
    AssignDestinationRequest, CreateVirtualTerminalRequest, CustomField, Destination,
    ListVirtualTerminalsQuery, SplitCodeRequest, UnassignDestinationRequest,
    UpdateVirtualTerminalRequest, VirtualTerminalStatus,
};

/// A notification destination attached to a virtual terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualTerminalDestination {
    #[serde(default)]
    pub id: Option<u64>,
    /// WhatsApp phone number.
    pub target: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub destination_type: Option<String>,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualTerminal {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub integration: Option<u64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, rename = "paymentMethods")]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub destinations: Vec<VirtualTerminalDestination>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub connect_account_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_virtual_terminal_deserialize() {
        let vt: VirtualTerminal = serde_json::from_value(json!({
            "id": 27,
            "code": "VT_L0X2JLA1",
            "name": "Sample Terminal",
            "paymentMethods": ["card"],
            "active": true,
            "destinations": [{"target": "+2347012345678", "name": "Phone", "type": "whatsapp"}],
            "created_at": "2024-07-01T12:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(vt.payment_methods, vec!["card"]);
        assert_eq!(vt.destinations[0].destination_type.as_deref(), Some("whatsapp"));
    }
}
