//! Host-facing request/response shapes.
//!
//! These mirror the event and result objects of an HTTP-triggered function:
//! the host hands over headers and a raw body, and expects back a status code,
//! a header map, and a body that is already a JSON string.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cors;
use crate::error::{Result, WalletError};

/// Header map as handed over / returned to the host platform.
pub type HeaderMap = BTreeMap<String, String>;

/// One inbound invocation. Immutable once built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: HeaderMap,
    #[serde(default)]
    pub body: Option<String>,
}

fn null_as_empty<'de, D>(d: D) -> std::result::Result<HeaderMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HeaderMap>::deserialize(d)?.unwrap_or_default())
}

impl InboundRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Header lookup. Tries the key as given, then its lowercase form, then
    /// any other casing (hosts disagree on header-name casing).
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(v) = self.headers.get(name) {
            return Some(v.as_str());
        }
        if let Some(v) = self.headers.get(&name.to_ascii_lowercase()) {
            return Some(v.as_str());
        }
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Raw body, empty when the host sent none.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// The only value handed back to the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl OutboundResponse {
    /// Response with the CORS policy headers and `payload` as JSON body.
    pub fn json(status_code: u16, payload: &Value) -> Self {
        Self {
            status_code,
            headers: cors::cors_headers(),
            body: payload.to_string(),
        }
    }

    /// 200 response from any serializable payload.
    pub fn ok<T: Serialize>(payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|e| WalletError::Internal(format!("encode response failed: {e}")))?;
        Ok(Self {
            status_code: 200,
            headers: cors::cors_headers(),
            body,
        })
    }
}
