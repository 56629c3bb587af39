//! Demo wallet core: request/response normalization shared by every handler.
//!
//! This crate owns the host-facing request and response shapes, the CORS
//! header policy, bearer credential extraction, and the error normalizer.
//! It carries no transport or runtime dependencies so handlers can be hosted
//! by any HTTP front (local axum server, serverless runtime, tests).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `WalletError`/`Result` so a handler
//! always produces exactly one response.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod auth;
pub mod cors;
pub mod error;
pub mod http;
pub mod normalize;

/// Shared result type.
pub use error::{Result, WalletError};
pub use http::{InboundRequest, OutboundResponse};
pub use normalize::{normalize, RawError};
