//! Shared application state for the wallet API.
//!
//! Read-only after startup: the loaded config and the channel authenticator.
//! Cloning is cheap (one `Arc`).

use std::sync::Arc;

use demo_wallet_core::error::Result;

use crate::config::WalletConfig;
use crate::provider::{ChannelAuthenticator, PusherAuthenticator};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: WalletConfig,
    authenticator: Arc<dyn ChannelAuthenticator>,
}

impl AppState {
    /// Build application state with the Pusher signer from `cfg.provider`.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: WalletConfig) -> Result<Self> {
        cfg.validate()?;
        let pusher = PusherAuthenticator::from_config(&cfg.provider);
        tracing::info!(
            stage = cfg.stage.as_str(),
            endpoint = %pusher.endpoint(),
            require_bearer = cfg.auth.require_bearer,
            "realtime provider configured"
        );
        Ok(Self::with_authenticator(cfg, Arc::new(pusher)))
    }

    /// Build with a caller-supplied authenticator (tests, other providers).
    pub fn with_authenticator(cfg: WalletConfig, authenticator: Arc<dyn ChannelAuthenticator>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, authenticator }),
        }
    }

    pub fn cfg(&self) -> &WalletConfig {
        &self.inner.cfg
    }

    pub fn authenticator(&self) -> Arc<dyn ChannelAuthenticator> {
        Arc::clone(&self.inner.authenticator)
    }
}
