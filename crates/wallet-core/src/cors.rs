//! CORS header policy applied to every response, success or failure.

use crate::http::HeaderMap;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

/// The fixed policy, in insertion order.
pub const POLICY: [(&str, &str); 3] = [
    (ALLOW_ORIGIN, "*"),
    (ALLOW_CREDENTIALS, "true"),
    (ALLOW_METHODS, "GET, POST, OPTIONS"),
];

pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    apply(&mut headers);
    headers
}

/// Overwrite the policy headers in `headers`, leaving other entries alone.
pub fn apply(headers: &mut HeaderMap) {
    for (name, value) in POLICY {
        headers.insert(name.to_string(), value.to_string());
    }
}
