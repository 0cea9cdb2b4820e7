//! Request bodies for the OTP endpoints.

use serde::{Deserialize, Serialize};

/// Why an OTP is being resent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResendOtpReason {
    ResendOtp,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub transfer_code: String,
    pub reason: ResendOtpReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeDisableOtpRequest {
    pub otp: String,
}
