//! Realtime channel authentication.
//!
//! Body is `application/x-www-form-urlencoded` as sent by the browser
//! realtime client: `socket_id`, `channel_name`, plus the wallet's
//! `publicKey` which becomes the channel member's `user_id`.

use serde::Deserialize;

use demo_wallet_core::auth::{extract_bearer, require_bearer};
use demo_wallet_core::error::{Result, WalletError};
use demo_wallet_core::{normalize, InboundRequest, OutboundResponse};

use crate::app_state::AppState;
use crate::provider::ChannelData;

#[derive(Debug, Deserialize)]
pub struct AuthForm {
    pub socket_id: String,
    pub channel_name: String,
    #[serde(rename = "publicKey", default)]
    pub public_key: Option<String>,
}

impl AuthForm {
    pub fn parse(body: &str) -> Result<Self> {
        serde_urlencoded::from_str(body)
            .map_err(|e| WalletError::Parse(format!("invalid auth request: {e}")))
    }
}

pub async fn auth(app: &AppState, req: &InboundRequest) -> OutboundResponse {
    match try_auth(app, req).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(code = e.client_code().as_str(), error = %e, "auth rejected");
            normalize(e)
        }
    }
}

async fn try_auth(app: &AppState, req: &InboundRequest) -> Result<OutboundResponse> {
    // A malformed header is always fatal; a missing one only when configured.
    let bearer = if app.cfg().auth.require_bearer {
        Some(require_bearer(req)?)
    } else {
        extract_bearer(req)?
    };

    let form = AuthForm::parse(req.body())?;
    tracing::debug!(
        channel = %form.channel_name,
        has_bearer = bearer.is_some(),
        "auth request"
    );

    let data = ChannelData {
        user_id: form.public_key,
    };
    let payload = app
        .authenticator()
        .authenticate(&form.socket_id, &form.channel_name, Some(&data))
        .await?;

    OutboundResponse::ok(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_body() {
        let f = AuthForm::parse("socket_id=1.2&channel_name=private-room&publicKey=GA%2BB").unwrap();
        assert_eq!(f.socket_id, "1.2");
        assert_eq!(f.channel_name, "private-room");
        assert_eq!(f.public_key.as_deref(), Some("GA+B"));
    }

    #[test]
    fn public_key_is_optional() {
        let f = AuthForm::parse("socket_id=1.2&channel_name=private-room").unwrap();
        assert!(f.public_key.is_none());
    }

    #[test]
    fn missing_fields_are_parse_errors() {
        for body in ["", "socket_id=1.2", "channel_name=x"] {
            let err = AuthForm::parse(body).unwrap_err();
            assert!(matches!(err, WalletError::Parse(_)), "{body:?}");
        }
    }
}
