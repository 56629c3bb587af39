#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use demo_wallet_api::app_state::AppState;
use demo_wallet_api::config;
use demo_wallet_api::provider::{AuthPayload, ChannelAuthenticator, ChannelData};
use demo_wallet_api::router::build_router;
use demo_wallet_core::error::ProviderError;

const CONFIG: &str = r#"
version: 1
provider:
  app_id: "1"
  key: "278d425bdf160c739803"
  secret: "7ad3773142a6692b25b8"
  cluster: "mt1"
"#;

fn app() -> axum::Router {
    build_router(AppState::new(config::load_from_str(CONFIG).unwrap()).unwrap())
}

fn app_requiring_bearer() -> axum::Router {
    let cfg = config::load_from_str(&format!("{CONFIG}auth:\n  require_bearer: true\n")).unwrap();
    build_router(AppState::new(cfg).unwrap())
}

/// Always fails the way an HTTP-backed provider would.
struct RejectingProvider;

#[async_trait]
impl ChannelAuthenticator for RejectingProvider {
    async fn authenticate(
        &self,
        _socket_id: &str,
        _channel: &str,
        _data: Option<&ChannelData>,
    ) -> Result<AuthPayload, ProviderError> {
        Err(ProviderError::upstream(
            503,
            json!({ "data": { "status": 429, "error": "over quota" } }),
        ))
    }
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_cors(resp: &axum::response::Response) {
    let h = resp.headers();
    assert_eq!(h["access-control-allow-origin"], "*");
    assert_eq!(h["access-control-allow-credentials"], "true");
    assert_eq!(h["access-control-allow-methods"], "GET, POST, OPTIONS");
}

// --- account ---

#[tokio::test]
async fn account_says_hello() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/account").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors(&resp);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_json(resp).await, json!({ "message": "Hello World" }));
}

// --- auth ---

#[tokio::test]
async fn auth_signs_channel() {
    let resp = app()
        .oneshot(form(
            "/api/auth",
            "socket_id=1234.1234&channel_name=private-foobar&publicKey=GABC",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors(&resp);
    let body = body_json(resp).await;
    assert!(body["auth"].as_str().unwrap().starts_with("278d425bdf160c739803:"));
    assert_eq!(body["channel_data"], r#"{"user_id":"GABC"}"#);
}

#[tokio::test]
async fn auth_accepts_bearer_header() {
    let mut req = form("/api/auth", "socket_id=1.1&channel_name=private-x&publicKey=G");
    req.headers_mut()
        .insert(header::AUTHORIZATION, "Bearer token".parse().unwrap());
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn auth_rejects_malformed_bearer() {
    let mut req = form("/api/auth", "socket_id=1.1&channel_name=private-x");
    req.headers_mut()
        .insert(header::AUTHORIZATION, "Token abc".parse().unwrap());
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_cors(&resp);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Authorization header malformed" })
    );
}

#[tokio::test]
async fn auth_requires_bearer_when_configured() {
    let resp = app_requiring_bearer()
        .oneshot(form("/api/auth", "socket_id=1.1&channel_name=private-x"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn auth_with_unparsable_body_is_400() {
    let resp = app().oneshot(form("/api/auth", "channel_name=private-x")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_cors(&resp);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("socket_id"));
}

#[tokio::test]
async fn auth_provider_validation_error_is_normalized() {
    let resp = app()
        .oneshot(form("/api/auth", "socket_id=nope&channel_name=private-x"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Invalid socket id: 'nope'" })
    );
}

#[tokio::test]
async fn auth_upstream_error_uses_nested_status() {
    let cfg = config::load_from_str(CONFIG).unwrap();
    let app = build_router(AppState::with_authenticator(cfg, Arc::new(RejectingProvider)));
    let resp = app
        .oneshot(form("/api/auth", "socket_id=1.1&channel_name=private-x"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_cors(&resp);
    assert_eq!(body_json(resp).await["error"], "over quota");
}

// --- preflight / pages ---

#[tokio::test]
async fn preflight_is_no_content_with_cors() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/auth")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_cors(&resp);
}

#[tokio::test]
async fn root_redirects_to_room_code() {
    let resp = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_cors(&resp);
    let location = resp.headers()[header::LOCATION].to_str().unwrap();
    let n: u32 = location.strip_prefix('/').unwrap().parse().unwrap();
    assert!((100_000..=999_999).contains(&n));
}

#[tokio::test]
async fn room_page_without_spa_is_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/123456").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_cors(&resp);
}
