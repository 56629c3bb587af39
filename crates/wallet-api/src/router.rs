//! Axum router wiring (HTTP -> handlers).
//!
//! Routes:
//! - `GET /api/account`, `POST /api/auth`, `OPTIONS /api/*` (preflight)
//! - `GET /` redirects to a random room code
//! - anything else falls back to the built SPA when `spa.dist_dir` is set
//!
//! The CORS policy headers are stamped on every response, including
//! redirects and 404s.

use std::path::Path;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use tower_http::services::{ServeDir, ServeFile};

use demo_wallet_core::{cors, InboundRequest, OutboundResponse};

use crate::{app_state::AppState, handlers, redirect};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/account", get(account).options(preflight))
        .route("/auth", post(auth).options(preflight));

    let mut router = Router::new().nest("/api", api);

    if let Some(dir) = &state.cfg().spa.dist_dir {
        let index = Path::new(dir).join("index.html");
        router = router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)));
    }

    router
        .layer(middleware::from_fn(root_redirect))
        .layer(middleware::map_response(with_cors))
        .with_state(state)
}

async fn account(headers: HeaderMap, body: Bytes) -> Response {
    into_http(handlers::account(&inbound(&headers, body)))
}

async fn auth(State(app): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    into_http(handlers::auth(&app, &inbound(&headers, body)).await)
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn root_redirect(req: Request, next: Next) -> Response {
    let target = if req.method() == Method::GET {
        redirect::route_name(req.uri().path())
            .and_then(|route| redirect::root_redirect(route, &mut rand::thread_rng()))
    } else {
        None
    };

    match target {
        Some(r) => {
            tracing::debug!(location = %r.location, "root redirect");
            let status = StatusCode::from_u16(r.status).unwrap_or(StatusCode::FOUND);
            (status, [(header::LOCATION, r.location)]).into_response()
        }
        None => next.run(req).await,
    }
}

async fn with_cors(mut res: Response) -> Response {
    for (name, value) in cors::POLICY {
        if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
            res.headers_mut().insert(name, HeaderValue::from_static(value));
        }
    }
    res
}

/// Host request -> handler input. Non-UTF-8 header values are dropped.
fn inbound(headers: &HeaderMap, body: Bytes) -> InboundRequest {
    let mut req = InboundRequest::new();
    for (name, value) in headers {
        if let Ok(v) = value.to_str() {
            req.headers.insert(name.as_str().to_string(), v.to_string());
        }
    }
    if !body.is_empty() {
        req.body = Some(String::from_utf8_lossy(&body).into_owned());
    }
    req
}

fn into_http(resp: OutboundResponse) -> Response {
    let OutboundResponse {
        status_code,
        headers,
        body,
    } = resp;
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut out = (status, body).into_response();
    for (name, value) in &headers {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(n), Ok(v)) => {
                out.headers_mut().insert(n, v);
            }
            _ => tracing::warn!(header = %name, "dropping invalid response header"),
        }
    }
    out.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    out
}
