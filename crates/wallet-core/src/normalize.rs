//! Error normalization: any failure shape -> one HTTP error response.
//!
//! Handlers hand whatever went wrong to [`normalize`]. The error is first
//! classified into a [`RawError`] variant, then resolved in a fixed priority
//! order into a payload and a status code.
//!
//! Resolution (first match wins):
//! 1. `Text(s)`                      -> `{"message": s}`
//! 2. `Upstream` with truthy `data`  -> `response.data`
//! 3. `Upstream` otherwise           -> `response`
//! 4. `Message`                      -> `{"message": message}`
//! 5. `Opaque(v)`                    -> `v`
//!
//! Status: `payload.status`, else the error's own status, else 400.

use serde_json::{json, Value};

use crate::error::{ProviderError, WalletError};
use crate::http::OutboundResponse;

pub const DEFAULT_STATUS: u16 = 400;

/// A failure of unknown origin, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawError {
    /// Bare string error.
    Text(String),
    /// HTTP client / SDK error that carries the upstream response body.
    Upstream { status: Option<u16>, response: Value },
    /// Error exposing only a message.
    Message { status: Option<u16>, message: Value },
    /// Anything else, passed through as-is.
    Opaque(Value),
}

/// Outcome of resolution, before it is rendered as a response.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedError {
    pub status: u16,
    pub payload: Value,
}

impl RawError {
    fn own_status(&self) -> Option<u16> {
        match self {
            RawError::Text(_) => None,
            RawError::Upstream { status, .. } | RawError::Message { status, .. } => *status,
            RawError::Opaque(v) => status_of(v),
        }
    }

    pub fn resolve(self) -> NormalizedError {
        let fallback = self.own_status();
        let payload = match self {
            RawError::Text(message) => json!({ "message": message }),
            RawError::Upstream { response, .. } => match response.get("data") {
                Some(data) if is_truthy(data) => data.clone(),
                _ => response,
            },
            RawError::Message { message, .. } => json!({ "message": message }),
            RawError::Opaque(v) => v,
        };
        let status = status_of(&payload).or(fallback).unwrap_or(DEFAULT_STATUS);
        NormalizedError { status, payload }
    }
}

/// Classify an arbitrary JSON error value.
impl From<Value> for RawError {
    fn from(v: Value) -> Self {
        let v = match v {
            Value::String(s) => return RawError::Text(s),
            other => other,
        };
        let status = status_of(&v);
        if let Some(response) = v.get("response").filter(|r| is_truthy(r)) {
            return RawError::Upstream {
                status,
                response: response.clone(),
            };
        }
        match v.get("message") {
            Some(m) if is_truthy(m) => RawError::Message {
                status,
                message: m.clone(),
            },
            _ => RawError::Opaque(v),
        }
    }
}

impl From<&str> for RawError {
    fn from(s: &str) -> Self {
        RawError::Text(s.to_string())
    }
}

impl From<String> for RawError {
    fn from(s: String) -> Self {
        RawError::Text(s)
    }
}

impl From<ProviderError> for RawError {
    fn from(e: ProviderError) -> Self {
        match e.response {
            Some(response) => RawError::Upstream {
                status: e.status,
                response,
            },
            None => RawError::Message {
                status: e.status,
                message: Value::String(e.message),
            },
        }
    }
}

impl From<WalletError> for RawError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::AuthFormat => RawError::Text(e.to_string()),
            WalletError::Parse(message) => RawError::Message {
                status: None,
                message: Value::String(message),
            },
            WalletError::Provider(p) => p.into(),
            WalletError::Config(_) | WalletError::Internal(_) => RawError::Message {
                status: Some(500),
                message: Value::String(e.to_string()),
            },
        }
    }
}

/// Turn any error into the response the host receives. Always logs.
pub fn normalize(err: impl Into<RawError>) -> OutboundResponse {
    let NormalizedError { status, payload } = err.into().resolve();
    tracing::error!(status, payload = %payload, "request failed");
    OutboundResponse::json(status, &payload)
}

/// `status` field as a valid HTTP status code, if any.
fn status_of(v: &Value) -> Option<u16> {
    let raw = match v.get("status")? {
        Value::Number(n) => match n.as_u64() {
            Some(u) => u,
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u16::MAX))
                .map(|f| f as u64)?,
        },
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u16::try_from(raw).ok().filter(|s| (100..=599).contains(s))
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
