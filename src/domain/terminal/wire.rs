//! Request bodies for terminal endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalEventType {
    Invoice,
    Transaction,
}

/// `process` and `view` apply to invoices; `process` and `print` to
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalEventAction {
    Process,
    View,
    Print,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendTerminalEventRequest {
    #[serde(rename = "type")]
    pub event_type: TerminalEventType,
    pub action: TerminalEventAction,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTerminalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body for both commissioning and decommissioning a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalDeviceRequest {
    pub serial_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_body() {
        let req = SendTerminalEventRequest {
            event_type: TerminalEventType::Invoice,
            action: TerminalEventAction::Process,
            data: json!({"id": 7895939, "reference": 4634337895939u64}),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["type"], "invoice");
        assert_eq!(v["action"], "process");
        assert_eq!(v["data"]["id"], 7895939);
    }
}
