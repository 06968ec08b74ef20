//! Content-negotiation guards.
//!
//! Each handler composes these at its top, before touching the body or the
//! store. They look only at headers and short-circuit via `?`.

use crate::error::ApiError;
use crate::request::Request;

const JSON: &str = "application/json";

/// Succeeds if the request accepts `application/json`: an exact entry, an
/// `application/*` or `*/*` wildcard. A missing `Accept` header is refused —
/// that is the behavior existing clients were written against.
pub(crate) fn accept_json(req: &Request) -> Result<(), ApiError> {
    let accepts = req
        .header("accept")
        .is_some_and(|accept| accept.split(',').any(|entry| {
            matches!(media_type(entry).as_str(), JSON | "application/*" | "*/*")
        }));
    if accepts { Ok(()) } else { Err(ApiError::NotAcceptable) }
}

/// Succeeds if the request body is declared as `application/json`.
/// Write handlers call this; reads have no body to check.
pub(crate) fn content_is_json(req: &Request) -> Result<(), ApiError> {
    match req.header("content-type") {
        Some(value) if media_type(value) == JSON => Ok(()),
        _ => Err(ApiError::UnsupportedMediaType),
    }
}

/// `application/json; charset=utf-8` → `application/json`. Media types are
/// case-insensitive; parameters never affect the match.
fn media_type(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
