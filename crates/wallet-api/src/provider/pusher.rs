//! Pusher channel signer.
//!
//! Produces the same `{auth, channel_data}` grant the provider's server SDKs
//! do: `auth = "<key>:<hex hmac-sha256(secret, socket_id:channel[:channel_data])>"`.
//! No network round-trip is involved; the provider verifies the signature
//! when the browser subscribes.

use async_trait::async_trait;

use demo_wallet_core::error::ProviderError;

use super::{AuthPayload, ChannelAuthenticator, ChannelData};
use crate::config::ProviderSection;

const MAX_CHANNEL_LEN: usize = 200;
const PRESENCE_PREFIX: &str = "presence-";

#[derive(Clone)]
pub struct PusherAuthenticator {
    app_id: String,
    key: String,
    secret: String,
    cluster: String,
    use_tls: bool,
}

impl std::fmt::Debug for PusherAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PusherAuthenticator")
            .field("app_id", &self.app_id)
            .field("key", &self.key)
            .field("cluster", &self.cluster)
            .finish_non_exhaustive()
    }
}

impl PusherAuthenticator {
    pub fn new(
        app_id: impl Into<String>,
        key: impl Into<String>,
        secret: impl Into<String>,
        cluster: impl Into<String>,
        use_tls: bool,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            key: key.into(),
            secret: secret.into(),
            cluster: cluster.into(),
            use_tls,
        }
    }

    pub fn from_config(cfg: &ProviderSection) -> Self {
        Self::new(&cfg.app_id, &cfg.key, &cfg.secret, &cfg.cluster, cfg.use_tls)
    }

    /// REST endpoint of the configured app.
    pub fn endpoint(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://api-{}.pusher.com/apps/{}", self.cluster, self.app_id)
    }

    pub fn sign(
        &self,
        socket_id: &str,
        channel: &str,
        data: Option<&ChannelData>,
    ) -> Result<AuthPayload, ProviderError> {
        validate_socket_id(socket_id)?;
        validate_channel(channel)?;
        if channel.starts_with(PRESENCE_PREFIX) && data.and_then(|d| d.user_id.as_ref()).is_none() {
            return Err(ProviderError::invalid(
                "Presence channel data must contain user_id",
            ));
        }

        let channel_data = data
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ProviderError::invalid(format!("Invalid channel data: {e}")))?;

        let mut to_sign = format!("{socket_id}:{channel}");
        if let Some(cd) = &channel_data {
            to_sign.push(':');
            to_sign.push_str(cd);
        }
        let mac = hmac_sha256::HMAC::mac(to_sign.as_bytes(), self.secret.as_bytes());

        Ok(AuthPayload {
            auth: format!("{}:{}", self.key, hex::encode(mac)),
            channel_data,
        })
    }
}

#[async_trait]
impl ChannelAuthenticator for PusherAuthenticator {
    async fn authenticate(
        &self,
        socket_id: &str,
        channel: &str,
        data: Option<&ChannelData>,
    ) -> Result<AuthPayload, ProviderError> {
        let payload = self.sign(socket_id, channel, data)?;
        tracing::debug!(%channel, %socket_id, "channel subscription signed");
        Ok(payload)
    }
}

// format: "<digits>.<digits>"
fn validate_socket_id(socket_id: &str) -> Result<(), ProviderError> {
    let ok = socket_id
        .split_once('.')
        .is_some_and(|(a, b)| is_digits(a) && is_digits(b));
    if ok {
        Ok(())
    } else {
        Err(ProviderError::invalid(format!("Invalid socket id: '{socket_id}'")))
    }
}

fn validate_channel(channel: &str) -> Result<(), ProviderError> {
    if channel.len() > MAX_CHANNEL_LEN {
        return Err(ProviderError::invalid(format!(
            "Channel name too long: '{channel}'"
        )));
    }
    let ok = !channel.is_empty()
        && channel
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-=@,.;".contains(c));
    if ok {
        Ok(())
    } else {
        Err(ProviderError::invalid(format!("Invalid channel name: '{channel}'")))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
