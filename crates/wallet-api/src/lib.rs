//! Demo wallet API library entry.
//!
//! Wires config, the realtime channel authenticator, the two request
//! handlers, and the SPA root redirect into an axum router. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod provider;
pub mod redirect;
pub mod router;
