//! Shared error type across the demo wallet crates.

use thiserror::Error;

/// Client-facing error codes (stable, used in logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed request body.
    BadRequest,
    /// `Authorization` header present but not a bearer credential.
    AuthMalformed,
    /// Realtime provider refused to sign.
    ProviderRejected,
    /// Configuration rejected at load time.
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthMalformed => "AUTH_MALFORMED",
            ClientCode::ProviderRejected => "PROVIDER_REJECTED",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Failure raised by a realtime channel provider.
///
/// `status` is set when the provider answered over HTTP; `response` holds
/// whatever body it sent back.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
    pub status: Option<u16>,
    pub response: Option<serde_json::Value>,
}

impl ProviderError {
    /// Local validation failure, no upstream response involved.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            response: None,
        }
    }

    /// Failure carrying an upstream HTTP status and body.
    pub fn upstream(status: u16, response: serde_json::Value) -> Self {
        Self {
            message: format!("provider responded with status {status}"),
            status: Some(status),
            response: Some(response),
        }
    }
}

/// Unified error type used by core and api.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Authorization header malformed")]
    AuthFormat,
    #[error("{0}")]
    Parse(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl WalletError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            WalletError::AuthFormat => ClientCode::AuthMalformed,
            WalletError::Parse(_) => ClientCode::BadRequest,
            WalletError::Provider(_) => ClientCode::ProviderRejected,
            WalletError::Config(_) => ClientCode::InvalidConfig,
            WalletError::Internal(_) => ClientCode::Internal,
        }
    }
}
