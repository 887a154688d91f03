use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tasknote_auth::authenticate;
use tasknote_core::{AppError, UserId};
use tracing::warn;

use crate::state::AppState;

/// The verified identity of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(*auth_user);
        }

        let user_id = authenticate(&parts.headers, &state.tokens)?;

        Ok(AuthUser(user_id))
    }
}

/// Rejects unauthenticated requests before the handler's extractors run.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::auth::require_auth;
///
/// let protected = Router::new()
///     .route("/", get(list_tasks))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = authenticate(req.headers(), &state.tokens).inspect_err(|err| {
        warn!(code = err.code(), path = %req.uri().path(), "Rejected unauthenticated request");
    })?;

    req.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(req).await)
}
