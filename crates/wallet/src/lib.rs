//! Top-level facade crate for the demo wallet API.
//!
//! Re-exports the normalization core and the handler library so users can depend on a single crate.

pub mod core {
    pub use demo_wallet_core::*;
}

pub mod api {
    pub use demo_wallet_api::*;
}
