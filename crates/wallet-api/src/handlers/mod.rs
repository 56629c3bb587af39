//! HTTP-triggered entry points.
//!
//! Each handler takes one [`InboundRequest`] and returns exactly one
//! [`OutboundResponse`]; failures never escape, they are normalized.
//!
//! [`InboundRequest`]: demo_wallet_core::InboundRequest
//! [`OutboundResponse`]: demo_wallet_core::OutboundResponse

pub mod account;
pub mod auth;

pub use account::account;
pub use auth::auth;
