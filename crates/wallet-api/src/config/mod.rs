//! Wallet API config loader (strict parsing, env overrides).

pub mod schema;

use std::fs;

use demo_wallet_core::error::{Result, WalletError};

pub use schema::{
    AuthSection, ProviderSection, ServerSection, SpaSection, Stage, TlsSection, WalletConfig,
};

/// Read `path`, apply process environment overrides, validate.
pub fn load_from_file(path: &str) -> Result<WalletConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WalletError::Config(format!("read config failed ({path}): {e}")))?;
    load_with_env(&s, |k| std::env::var(k).ok())
}

/// Parse and validate without looking at the environment.
pub fn load_from_str(s: &str) -> Result<WalletConfig> {
    load_with_env(s, |_| None)
}

/// Parse, apply overrides from `env`, validate.
pub fn load_with_env(s: &str, env: impl Fn(&str) -> Option<String>) -> Result<WalletConfig> {
    let mut cfg: WalletConfig = serde_yaml::from_str(s)
        .map_err(|e| WalletError::Config(format!("invalid yaml: {e}")))?;
    cfg.apply_env(env)?;
    cfg.validate()?;
    Ok(cfg)
}
