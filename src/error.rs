//! Unified SDK error types.

use thiserror::Error;

/// Status code reported by every remote-API failure (upstream / bad gateway).
pub const API_ERROR_STATUS: u16 = 502;

/// Default status code for local application errors.
pub const APP_ERROR_STATUS: u16 = 500;

/// Top-level SDK error.
///
/// Every method on every sub-client fails with this type. Local problems
/// (bad secret key, unserializable query) are [`SdkError::App`]; anything that
/// originates from the Paystack call itself is [`SdkError::Api`].
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Paystack API Error: {0}")]
    Api(#[from] ApiError),

    #[error("{message}")]
    App { message: String, status_code: u16 },
}

/// Failure of a remote Paystack call.
///
/// Transport errors, non-2xx responses and `status: false` envelopes all
/// collapse into this one kind; only the message tells them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Pick the first non-empty message in priority order: remote, then
    /// transport, then the module's static fallback.
    pub(crate) fn resolve(remote: Option<&str>, transport: Option<&str>, fallback: &str) -> Self {
        let message = [remote, transport]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
            .unwrap_or(fallback);
        Self::new(message)
    }
}

impl SdkError {
    /// Generic application error with the default 500 status.
    pub fn app(message: impl Into<String>) -> Self {
        Self::App {
            message: message.into(),
            status_code: APP_ERROR_STATUS,
        }
    }

    pub fn app_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::App {
            message: message.into(),
            status_code,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            SdkError::Api(_) => API_ERROR_STATUS,
            SdkError::App { status_code, .. } => *status_code,
        }
    }

    /// All SDK errors are expected failures the caller can act on.
    pub fn is_operational(&self) -> bool {
        true
    }

    /// The raw message without the `Paystack API Error:` prefix.
    pub fn message(&self) -> &str {
        match self {
            SdkError::Api(e) => &e.message,
            SdkError::App { message, .. } => message,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, SdkError::Api(_))
    }
}
