//! Bearer credential extraction from the `Authorization` header.

use crate::error::{Result, WalletError};
use crate::http::InboundRequest;

pub const AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer credential out of `req`.
///
/// A missing header is `Ok(None)`; the caller decides whether that is fatal.
/// A header that does not start with exactly `"Bearer "` is `AuthFormat`.
pub fn extract_bearer(req: &InboundRequest) -> Result<Option<String>> {
    let Some(value) = req.header(AUTHORIZATION) else {
        return Ok(None);
    };
    value
        .strip_prefix(BEARER_PREFIX)
        .map(|token| Some(token.to_string()))
        .ok_or(WalletError::AuthFormat)
}

/// Like [`extract_bearer`], but a missing header is also `AuthFormat`.
pub fn require_bearer(req: &InboundRequest) -> Result<String> {
    extract_bearer(req)?.ok_or(WalletError::AuthFormat)
}
