use serde_json::json;

use demo_wallet_core::{InboundRequest, OutboundResponse};

/// Health check. Input is ignored.
pub fn account(_req: &InboundRequest) -> OutboundResponse {
    OutboundResponse::json(200, &json!({ "message": "Hello World" }))
}
