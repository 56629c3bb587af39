//! Config schema: strict sections, defaults, validation, env overrides.

use std::net::SocketAddr;
use std::str::FromStr;

use serde::Deserialize;
use demo_wallet_core::error::{Result, WalletError};

pub const ENV_STAGE: &str = "WALLET_STAGE";
pub const ENV_PUSHER_ID: &str = "PUSHER_ID";
pub const ENV_PUSHER_KEY: &str = "PUSHER_KEY";
pub const ENV_PUSHER_SECRET: &str = "PUSHER_SECRET";
pub const ENV_PUSHER_CLUSTER: &str = "PUSHER_CLUSTER";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletConfig {
    pub version: u32,

    #[serde(default)]
    pub stage: Stage,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub provider: ProviderSection,

    #[serde(default)]
    pub auth: AuthSection,

    #[serde(default)]
    pub spa: SpaSection,
}

impl WalletConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WalletError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate(self.stage)?;
        self.provider.validate()?;

        Ok(())
    }

    /// Environment wins over the file for the stage and provider credentials.
    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(stage) = env(ENV_STAGE) {
            self.stage = stage.parse()?;
        }
        let p = &mut self.provider;
        for (name, slot) in [
            (ENV_PUSHER_ID, &mut p.app_id),
            (ENV_PUSHER_KEY, &mut p.key),
            (ENV_PUSHER_SECRET, &mut p.secret),
            (ENV_PUSHER_CLUSTER, &mut p.cluster),
        ] {
            if let Some(v) = env(name) {
                *slot = v;
            }
        }
        Ok(())
    }
}

/// Deployment stage. Replaces the old process-wide "is dev" switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Development,
    Production,
}

impl Stage {
    pub fn is_dev(self) -> bool {
        self == Stage::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Development => "development",
            Stage::Production => "production",
        }
    }
}

impl FromStr for Stage {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" | "dev" => Ok(Stage::Development),
            "production" | "prod" => Ok(Stage::Production),
            other => Err(WalletError::Config(format!("unknown stage: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Local HTTPS serving, development only.
    #[serde(default)]
    pub tls: Option<TlsSection>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            tls: None,
        }
    }
}

impl ServerSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            WalletError::Config(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }

    pub fn validate(&self, stage: Stage) -> Result<()> {
        self.listen_addr()?;
        if let Some(tls) = &self.tls {
            if !stage.is_dev() {
                return Err(WalletError::Config(
                    "server.tls is only allowed in the development stage".into(),
                ));
            }
            if tls.cert_path.is_empty() || tls.key_path.is_empty() {
                return Err(WalletError::Config(
                    "server.tls.cert_path and key_path must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsSection {
    pub cert_path: String,
    pub key_path: String,
}

/// Realtime pub/sub provider credentials.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSection {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            key: String::new(),
            secret: String::new(),
            cluster: String::new(),
            use_tls: default_use_tls(),
        }
    }
}

impl ProviderSection {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("app_id", &self.app_id),
            ("key", &self.key),
            ("secret", &self.secret),
            ("cluster", &self.cluster),
        ] {
            if value.trim().is_empty() {
                return Err(WalletError::Config(format!(
                    "provider.{field} must be set (file or environment)"
                )));
            }
        }
        Ok(())
    }
}

fn default_use_tls() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Reject `auth` calls that carry no `Authorization` header.
    #[serde(default)]
    pub require_bearer: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaSection {
    /// Built single-page app; served for room-code paths when set.
    #[serde(default)]
    pub dist_dir: Option<String>,
}
