//! Integration settings.

pub mod client;

use serde::{Deserialize, Serialize};

/// Seconds a checkout session stays valid. `0` disables the timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSessionTimeout {
    pub payment_session_timeout: u64,
}

/// Body of the update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePaymentSessionTimeoutRequest {
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let t: PaymentSessionTimeout =
            serde_json::from_value(json!({"payment_session_timeout": 30})).unwrap();
        assert_eq!(t.payment_session_timeout, 30);
        assert_eq!(
            serde_json::to_value(UpdatePaymentSessionTimeoutRequest { timeout: 30 }).unwrap(),
            json!({"timeout": 30})
        );
    }
}
