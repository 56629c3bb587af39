//! Demo wallet API server.
//!
//! - `GET /api/account`: health check
//! - `POST /api/auth`: realtime channel authentication
//! - `GET /`: redirect to a random room code
//!
//! Config path comes from `WALLET_CONFIG` (default `wallet.yaml`).

use std::process::ExitCode;

use axum_server::tls_rustls::RustlsConfig;
use tracing_subscriber::{fmt, EnvFilter};

use demo_wallet_api::{app_state, config, router};
use demo_wallet_core::error::{Result, WalletError};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), error = %e, "demo-wallet-api stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("WALLET_CONFIG").unwrap_or_else(|_| "wallet.yaml".into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;
    let tls = cfg.server.tls.clone();

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    match tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .map_err(|e| WalletError::Config(format!("load tls cert/key failed: {e}")))?;
            tracing::info!(%listen, "demo-wallet-api starting (https)");
            axum_server::bind_rustls(listen, rustls)
                .serve(app.into_make_service())
                .await
                .map_err(|e| WalletError::Internal(format!("server failed: {e}")))
        }
        None => {
            tracing::info!(%listen, "demo-wallet-api starting");
            let listener = tokio::net::TcpListener::bind(listen)
                .await
                .map_err(|e| WalletError::Internal(format!("bind {listen} failed: {e}")))?;
            axum::serve(listener, app)
                .await
                .map_err(|e| WalletError::Internal(format!("server failed: {e}")))
        }
    }
}
