//! Realtime channel authentication seam.
//!
//! Handlers only see [`ChannelAuthenticator`]; the Pusher signer is the
//! production implementation and tests plug in their own.

pub mod pusher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use demo_wallet_core::error::ProviderError;

pub use pusher::PusherAuthenticator;

/// Signed subscription grant returned to the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub auth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,
}

/// Per-member data attached to a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[async_trait]
pub trait ChannelAuthenticator: Send + Sync {
    /// Authorize `socket_id` to subscribe to `channel`.
    async fn authenticate(
        &self,
        socket_id: &str,
        channel: &str,
        data: Option<&ChannelData>,
    ) -> Result<AuthPayload, ProviderError>;
}
