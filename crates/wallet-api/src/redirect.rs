//! Root redirect for the single-page app.
//!
//! The bare root has no room of its own; visitors are sent to a fresh random
//! six-digit room code. Room-code pages pass through untouched.

use rand::Rng;

pub const INDEX_ROUTE: &str = "index";
pub const ROOM_ROUTE: &str = "roomCode";

pub const ROOM_CODE_MIN: u32 = 100_000;
pub const ROOM_CODE_MAX: u32 = 999_999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: u16,
    pub location: String,
}

/// Page route name for a request path, if it is a page at all.
pub fn route_name(path: &str) -> Option<&'static str> {
    match path.trim_start_matches('/') {
        "" => Some(INDEX_ROUTE),
        rest if !rest.contains('/') => Some(ROOM_ROUTE),
        _ => None,
    }
}

pub fn root_redirect<R: Rng + ?Sized>(route: &str, rng: &mut R) -> Option<Redirect> {
    if route != INDEX_ROUTE {
        return None;
    }
    let code = rng.gen_range(ROOM_CODE_MIN..=ROOM_CODE_MAX);
    Some(Redirect {
        status: 302,
        location: format!("/{code}"),
    })
}
