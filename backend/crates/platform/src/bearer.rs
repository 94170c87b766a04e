//! Bearer Token Extraction
//!
//! Common handling for the `Authorization: Bearer <token>` header.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from request headers
///
/// Returns `None` when the header is missing, uses a different scheme,
/// or carries an empty token. The scheme comparison is case-insensitive
/// per RFC 7235.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
