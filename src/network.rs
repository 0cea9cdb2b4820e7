//! Network constants for the Paystack API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.paystack.co";

/// Request timeout applied to every call made through the shared client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Message surfaced when a request hits [`DEFAULT_TIMEOUT`].
pub const TIMEOUT_ERROR_MESSAGE: &str = "Unable to perform request due to timeout. Try again";
