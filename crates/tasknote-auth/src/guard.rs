//! Resolution of a request's identity from its `Authorization` header.
//!
//! This is the decision half of the access guard: it either yields a trusted
//! [`UserId`] or the [`AuthError`] that rejects the request. The HTTP layer
//! composes it in front of every protected handler.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use tasknote_core::UserId;

use crate::error::AuthError;
use crate::jwt::TokenService;

/// The only accepted authorization scheme, including its separator.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Splits the `Bearer <token>` envelope.
///
/// The value must start with the literal scheme and leave exactly one
/// non-empty token segment behind it.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::Malformed)?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::Malformed);
    }

    Ok(token)
}

/// Resolves the authenticated identity of a request.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<UserId, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::Malformed)?;

    let token = bearer_token(header)?;

    tokens.verify(token)
}
