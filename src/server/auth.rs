//! Request identity extraction.
//!
//! Authentication mechanics (credentials, sessions, tokens) live in the
//! fronting layer, which injects the authenticated user's id into each
//! request. This module is the only place that knows how that identity
//! arrives; everything downstream treats it as an opaque string.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Response;

use super::types::message_response;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The calling user's identity.
///
/// Extracting this from a request without a usable identity header rejects
/// the request with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| UserId(value.to_string()))
            .ok_or_else(|| {
                message_response(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized - No user identity provided",
                )
            })
    }
}
